//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Shared HTTP client and Bot instance creation
//! - Command registration in the Telegram UI

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use pdfcore::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
}

impl Command {
    /// Parses the leading command token of a message text.
    ///
    /// Only the first whitespace-separated token is considered, so deep-link
    /// payloads (`/start abc`) still match. A command addressed to another
    /// bot (`/start@other_bot`) or an unknown command yields `None`.
    pub fn from_text(text: &str, bot_username: &str) -> Option<Self> {
        let token = text.split_whitespace().next()?;
        if !token.starts_with('/') {
            return None;
        }
        Command::parse(token, bot_username).ok()
    }
}

/// Creates the HTTP client shared by the bot and the photo fetcher
///
/// The timeout must stay above the long-poll timeout, otherwise getUpdates
/// would be cut off by the client.
pub fn create_http_client() -> anyhow::Result<reqwest::Client> {
    Ok(ClientBuilder::new().timeout(config::network::timeout()).build()?)
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Token missing or BOT_API_URL invalid
pub fn create_bot(client: reqwest::Client) -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(anyhow::anyhow!(
            "Bot token is not set (TELEGRAM_ACCESS_TOKEN, BOT_TOKEN or TELOXIDE_TOKEN)"
        ));
    }

    let bot = Bot::with_client(token, client);
    let bot = match config::BOT_API_URL.as_deref() {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
            bot.set_api_url(url)
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
