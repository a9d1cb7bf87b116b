//! Update routing
//!
//! Decides what to do with one inbound update:
//! - `/start` → welcome text
//! - photo → fetch the largest variant, convert, reply with `converted.pdf`
//! - anything else → nothing
//!
//! Both ingress adapters (webhook and long polling) call [`route`], so the
//! behavior does not depend on how the update arrived.

use std::sync::Arc;

use pdfcore::config;
use pdfcore::{ConvertError, PdfOptions};
use teloxide::types::ChatId;

use super::bot::Command;
use super::error::BotError;
use super::fetcher::ImageFetcher;
use super::sender::ReplySender;
use super::types::{InboundUpdate, IncomingMessage, PhotoVariant};

/// Everything the router needs to act on an update
#[derive(Clone)]
pub struct ConverterDeps {
    pub fetcher: Arc<dyn ImageFetcher>,
    pub sender: Arc<dyn ReplySender>,
    pub pdf_options: PdfOptions,
    /// Send an apology text to the chat when a photo cannot be converted
    pub notify_on_failure: bool,
}

impl ConverterDeps {
    /// Default PDF options, failure notices from `NOTIFY_ON_FAILURE`
    pub fn new(fetcher: Arc<dyn ImageFetcher>, sender: Arc<dyn ReplySender>) -> Self {
        Self {
            fetcher,
            sender,
            pdf_options: PdfOptions::default(),
            notify_on_failure: *config::NOTIFY_ON_FAILURE,
        }
    }

    pub fn with_notify_on_failure(mut self, notify: bool) -> Self {
        self.notify_on_failure = notify;
        self
    }

    pub fn with_pdf_options(mut self, options: PdfOptions) -> Self {
        self.pdf_options = options;
        self
    }
}

/// What the router did with an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Welcome text sent
    Welcome,
    /// PDF sent
    Done,
    /// Nothing to do
    Ignored,
}

/// Routes one update. Updates without a message are ignored.
pub async fn route(deps: &ConverterDeps, update: &InboundUpdate) -> Result<RouteOutcome, BotError> {
    match &update.message {
        Some(message) => route_message(deps, message).await,
        None => {
            log::debug!("Update {} carries no message, ignoring", update.update_id);
            Ok(RouteOutcome::Ignored)
        }
    }
}

/// Routes one message.
///
/// A recognized command wins over an attached photo. Errors are returned to
/// the caller after logging; when `notify_on_failure` is set and the photo
/// could not be converted, the chat also gets a short apology first.
pub async fn route_message(deps: &ConverterDeps, message: &IncomingMessage) -> Result<RouteOutcome, BotError> {
    let chat_id = message.chat_id;

    if let Some(Command::Start) = message.command {
        log::info!("/start from chat {}", chat_id);
        deps.sender.send_prompt(chat_id, config::messages::WELCOME).await?;
        return Ok(RouteOutcome::Welcome);
    }

    let Some(photo) = message.largest_photo() else {
        return Ok(RouteOutcome::Ignored);
    };

    match convert_and_reply(deps, chat_id, photo).await {
        Ok(()) => Ok(RouteOutcome::Done),
        Err(e) => {
            log::error!("Failed to convert photo {} for chat {} [{}]: {}", photo.file_id, chat_id, e.kind(), e);
            if deps.notify_on_failure && e.is_conversion_failure() {
                if let Err(notice_err) = deps.sender.send_text(chat_id, config::messages::CONVERSION_FAILED).await {
                    log::warn!("Failed to send failure notice to chat {}: {}", chat_id, notice_err);
                }
            }
            Err(e)
        }
    }
}

async fn convert_and_reply(deps: &ConverterDeps, chat_id: ChatId, photo: &PhotoVariant) -> Result<(), BotError> {
    log::info!(
        "Converting photo {} ({}x{}) for chat {}",
        photo.file_id,
        photo.width,
        photo.height,
        chat_id
    );

    let pdf = convert_photo(deps, &photo.file_id).await?;
    deps.sender
        .send_document(chat_id, pdf, config::pdf::OUTPUT_FILE_NAME)
        .await
}

/// Fetches a photo and encodes it as a PDF.
///
/// Encoding is CPU-bound and runs on the blocking pool.
pub async fn convert_photo(deps: &ConverterDeps, file_id: &str) -> Result<Vec<u8>, BotError> {
    let bytes = deps.fetcher.fetch(file_id).await?;
    let options = deps.pdf_options.clone();

    let pdf = tokio::task::spawn_blocking(move || pdfcore::image_to_pdf_with(&bytes, &options))
        .await
        .map_err(|e| ConvertError::EncodeFailed(format!("encoder task failed: {}", e)))??;

    Ok(pdf)
}
