//! Resolving a photo reference to its bytes
//!
//! Two steps against the Bot API: `getFile` turns the file id into a storage
//! path, then the file is downloaded from `<api>/file/bot<token>/<path>`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::FileId;
use url::Url;

use super::error::BotError;

/// Downloads the bytes behind a provider file reference
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BotError>;
}

/// [`ImageFetcher`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramFileFetcher {
    bot: Bot,
    client: reqwest::Client,
}

impl TelegramFileFetcher {
    pub fn new(bot: Bot, client: reqwest::Client) -> Self {
        Self { bot, client }
    }
}

#[async_trait]
impl ImageFetcher for TelegramFileFetcher {
    async fn fetch(&self, file_id: &str) -> Result<Vec<u8>, BotError> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| BotError::FileLookup {
                file_id: file_id.to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("Resolved file {} to path {}", file_id, file.path);

        let url = file_download_url(&self.bot.api_url(), self.bot.token(), &file.path)?;
        let bytes = pdfcore::fetch_image(&self.client, &url).await?;
        Ok(bytes)
    }
}

/// Builds the download URL for a file path returned by getFile.
pub fn file_download_url(api_url: &Url, token: &str, file_path: &str) -> Result<Url, url::ParseError> {
    api_url.join(&format!("file/bot{}/{}", token, file_path))
}
