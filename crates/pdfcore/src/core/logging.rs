//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A one-shot dump of the effective configuration at startup

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger was already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the configuration the bot is about to run with.
///
/// The token itself is never written; only whether it is set and a short
/// masked prefix for telling bots apart.
pub fn log_startup_configuration(use_webhook: bool) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config::BOT_TOKEN.is_empty() {
        log::error!("❌ Bot token: not set (TELEGRAM_ACCESS_TOKEN / BOT_TOKEN / TELOXIDE_TOKEN)");
    } else {
        log::info!("✅ Bot token: {}", mask_token(&config::BOT_TOKEN));
    }

    match config::BOT_API_URL.as_deref() {
        Some(url) => log::info!("Bot API URL: {}", url),
        None => log::info!("Bot API URL: default (api.telegram.org)"),
    }

    if use_webhook {
        match config::WEBHOOK_URL.as_deref() {
            Some(url) => log::info!("Ingress: webhook {} (listening on {})", url, *config::WEBHOOK_ADDR),
            None => log::error!("❌ Ingress: webhook requested but WEBHOOK_URL is not set"),
        }
    } else {
        log::info!("Ingress: long polling (timeout {}s)", config::polling::TIMEOUT_SECS);
    }

    log::info!(
        "PDF output: {} DPI, JPEG quality {}, file name {}",
        config::pdf::RESOLUTION_DPI,
        config::pdf::JPEG_QUALITY,
        config::pdf::OUTPUT_FILE_NAME
    );
    log::info!("Failure notices to chat: {}", *config::NOTIFY_ON_FAILURE);
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Keeps the bot id part of a `<id>:<secret>` token and hides the secret.
fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) => format!("{}:***", id),
        None => "***".to_string(),
    }
}
