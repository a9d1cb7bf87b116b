//! Outbound replies
//!
//! The router only talks to [`ReplySender`]; [`TelegramSender`] is the
//! production implementation over the Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ForceReply, InputFile};

use super::error::BotError;

/// Sends replies into a chat
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Plain text message
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), BotError>;

    /// Text that asks the client to open a reply box.
    ///
    /// Falls back to a plain text message for senders without reply markup.
    async fn send_prompt(&self, chat_id: ChatId, text: &str) -> Result<(), BotError> {
        self.send_text(chat_id, text).await
    }

    /// Binary attachment under the given file name
    async fn send_document(&self, chat_id: ChatId, bytes: Vec<u8>, file_name: &str) -> Result<(), BotError>;
}

/// [`ReplySender`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySender for TelegramSender {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), BotError> {
        self.bot
            .send_message(chat_id, text)
            .await
            .map_err(|e| BotError::SendFailed(e.to_string()))?;
        Ok(())
    }

    async fn send_prompt(&self, chat_id: ChatId, text: &str) -> Result<(), BotError> {
        self.bot
            .send_message(chat_id, text)
            .reply_markup(ForceReply::new())
            .await
            .map_err(|e| BotError::SendFailed(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat_id: ChatId, bytes: Vec<u8>, file_name: &str) -> Result<(), BotError> {
        let size = bytes.len();
        self.bot
            .send_document(chat_id, InputFile::memory(bytes).file_name(file_name.to_string()))
            .await
            .map_err(|e| BotError::SendFailed(e.to_string()))?;
        log::info!("Sent {} ({} bytes) to chat {}", file_name, size, chat_id);
        Ok(())
    }
}
