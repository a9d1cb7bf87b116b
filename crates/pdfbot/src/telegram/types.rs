//! Typed view of inbound updates
//!
//! Telegram updates are converted at the ingress boundary into these small
//! structures so the router never handles raw or partially-filled payloads.
//! Only `message` updates are inspected; every other update kind arrives
//! here with `message: None`.

use teloxide::types::{ChatId, Message, PhotoSize, Update, UpdateKind};

use super::bot::Command;

/// One size rendition of an uploaded photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoVariant {
    /// Provider file reference, resolved with getFile
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

impl PhotoVariant {
    pub fn new(file_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_id: file_id.into(),
            width,
            height,
        }
    }
}

impl From<&PhotoSize> for PhotoVariant {
    fn from(size: &PhotoSize) -> Self {
        Self {
            file_id: size.file.id.0.clone(),
            width: size.width,
            height: size.height,
        }
    }
}

/// The parts of a message the router looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Where replies go
    pub chat_id: ChatId,
    /// Set only for recognized bot commands
    pub command: Option<Command>,
    /// Provider order, smallest to largest; empty when there is no photo
    pub photo: Vec<PhotoVariant>,
}

impl IncomingMessage {
    /// A message with neither a command nor a photo
    pub fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            command: None,
            photo: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_photo(mut self, photo: Vec<PhotoVariant>) -> Self {
        self.photo = photo;
        self
    }

    /// Builds the typed view of a Telegram message.
    ///
    /// `bot_username` is needed to accept `/start@<bot_username>` in groups.
    pub fn from_telegram(msg: &Message, bot_username: &str) -> Self {
        Self {
            chat_id: msg.chat.id,
            command: msg.text().and_then(|text| Command::from_text(text, bot_username)),
            photo: msg
                .photo()
                .map(|sizes| sizes.iter().map(PhotoVariant::from).collect())
                .unwrap_or_default(),
        }
    }

    /// The variant the converter uses: the last (largest) one
    pub fn largest_photo(&self) -> Option<&PhotoVariant> {
        self.photo.last()
    }
}

/// One inbound event, reduced to what the router needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundUpdate {
    pub update_id: u32,
    pub message: Option<IncomingMessage>,
}

impl InboundUpdate {
    pub fn from_telegram(update: &Update, bot_username: &str) -> Self {
        let message = match &update.kind {
            UpdateKind::Message(msg) => Some(IncomingMessage::from_telegram(msg, bot_username)),
            _ => None,
        };

        Self {
            update_id: update.id.0,
            message,
        }
    }
}
