//! Shared test doubles and fixtures for pdfbot integration tests
//!
//! - `StubFetcher`: in-memory `ImageFetcher` keyed by file id
//! - `RecordingSender`: `ReplySender` that records every reply
//! - update JSON builders in the shape Telegram sends them

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{ImageFormat, Rgb, RgbImage};
use pdfbot::{BotError, ConverterDeps, ImageFetcher, ReplySender};
use pdfcore::ConvertError;
use serde_json::{json, Value};
use teloxide::types::ChatId;

/// What a stubbed file id resolves to
#[derive(Clone)]
pub enum StubFile {
    Bytes(Vec<u8>),
    Status(u16),
}

/// `ImageFetcher` serving canned responses and recording requested ids
#[derive(Default)]
pub struct StubFetcher {
    files: HashMap<String, StubFile>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(mut self, file_id: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(file_id.to_string(), StubFile::Bytes(bytes));
        self
    }

    pub fn with_status(mut self, file_id: &str, status: u16) -> Self {
        self.files.insert(file_id.to_string(), StubFile::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BotError> {
        self.calls.lock().unwrap().push(file_id.to_string());
        match self.files.get(file_id) {
            Some(StubFile::Bytes(bytes)) => Ok(bytes.clone()),
            Some(StubFile::Status(code)) => Err(BotError::Convert(ConvertError::FetchFailed {
                status: reqwest::StatusCode::from_u16(*code).unwrap(),
            })),
            None => Err(BotError::FileLookup {
                file_id: file_id.to_string(),
                reason: "unknown file id".to_string(),
            }),
        }
    }
}

/// One recorded reply
#[derive(Debug, Clone, PartialEq)]
pub enum SentReply {
    Text { chat_id: ChatId, text: String },
    Prompt { chat_id: ChatId, text: String },
    Document { chat_id: ChatId, file_name: String, bytes: Vec<u8> },
}

/// `ReplySender` that records replies; documents can be made to fail
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<SentReply>>,
    fail_documents: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_documents() -> Self {
        Self {
            fail_documents: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<SentReply> {
        self.sent()
            .into_iter()
            .filter(|r| matches!(r, SentReply::Document { .. }))
            .collect()
    }
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), BotError> {
        self.sent.lock().unwrap().push(SentReply::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_prompt(&self, chat_id: ChatId, text: &str) -> Result<(), BotError> {
        self.sent.lock().unwrap().push(SentReply::Prompt {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_document(&self, chat_id: ChatId, bytes: Vec<u8>, file_name: &str) -> Result<(), BotError> {
        if self.fail_documents {
            return Err(BotError::SendFailed("upload rejected".to_string()));
        }
        self.sent.lock().unwrap().push(SentReply::Document {
            chat_id,
            file_name: file_name.to_string(),
            bytes,
        });
        Ok(())
    }
}

/// Router dependencies over the given doubles, failure notices off
pub fn deps(fetcher: Arc<StubFetcher>, sender: Arc<RecordingSender>) -> ConverterDeps {
    ConverterDeps::new(fetcher, sender).with_notify_on_failure(false)
}

/// Small solid-color JPEG
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 120, 40]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
    buf.into_inner()
}

fn message(chat_id: i64, extra: Value) -> Value {
    let mut msg = json!({
        "message_id": 10,
        "date": 1700000000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Tester" },
        "from": { "id": chat_id, "is_bot": false, "first_name": "Tester" }
    });
    if let (Some(target), Some(fields)) = (msg.as_object_mut(), extra.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    msg
}

fn photo_size(file_id: &str, side: u32) -> Value {
    json!({
        "file_id": file_id,
        "file_unique_id": format!("unique-{}", file_id),
        "file_size": side * 12,
        "width": side,
        "height": side
    })
}

/// Update carrying `/start`
pub fn start_update(update_id: u32, chat_id: i64) -> Value {
    json!({
        "update_id": update_id,
        "message": message(chat_id, json!({
            "text": "/start",
            "entities": [{ "type": "bot_command", "offset": 0, "length": 6 }]
        }))
    })
}

/// Update carrying a photo with the given `(file_id, side)` variants
pub fn photo_update(update_id: u32, chat_id: i64, variants: &[(&str, u32)]) -> Value {
    let photo: Vec<Value> = variants.iter().map(|(id, side)| photo_size(id, *side)).collect();
    json!({
        "update_id": update_id,
        "message": message(chat_id, json!({ "photo": photo }))
    })
}

/// Update carrying plain text
pub fn text_update(update_id: u32, chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": message(chat_id, json!({ "text": text }))
    })
}

/// `edited_message` update, which the router never inspects
pub fn edited_message_update(update_id: u32, chat_id: i64) -> Value {
    let mut edited = message(chat_id, json!({ "text": "/start" }));
    edited["edit_date"] = json!(1700000100);
    json!({
        "update_id": update_id,
        "edited_message": edited
    })
}
