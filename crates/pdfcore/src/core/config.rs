//! Configuration for the bot
//!
//! Values are read once from the environment (after `.env` is loaded by the
//! binary) and cached for the lifetime of the process.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from TELEGRAM_ACCESS_TOKEN, BOT_TOKEN or TELOXIDE_TOKEN (first one set wins)
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("TELEGRAM_ACCESS_TOKEN")
        .or_else(|_| env::var("BOT_TOKEN"))
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_default()
});

/// Custom Bot API server URL
/// Read from BOT_API_URL environment variable
/// Unset means the public api.telegram.org endpoint
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Public URL Telegram should POST updates to
/// Read from WEBHOOK_URL environment variable
/// Required for `run --webhook`
pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| env::var("WEBHOOK_URL").ok());

/// Socket address the webhook HTTP server binds to
/// Read from WEBHOOK_ADDR environment variable
/// Default: 0.0.0.0:8000
pub static WEBHOOK_ADDR: Lazy<String> =
    Lazy::new(|| env::var("WEBHOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Whether a failed conversion also sends an apology message to the chat
/// Read from NOTIFY_ON_FAILURE environment variable
/// Default: true
pub static NOTIFY_ON_FAILURE: Lazy<bool> = Lazy::new(|| parse_flag(env::var("NOTIFY_ON_FAILURE").ok(), true));

/// Interprets a boolean-ish environment value, falling back to `default`
/// when it is unset or unrecognized.
pub fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    /// Covers Bot API calls, photo downloads and document uploads.
    /// Must stay above `polling::TIMEOUT_SECS` or long polls get cut off.
    pub const REQUEST_TIMEOUT_SECS: u64 = 360;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Long polling configuration
pub mod polling {
    use super::Duration;

    /// Long-poll timeout passed to getUpdates (in seconds)
    pub const TIMEOUT_SECS: u64 = 300;

    /// Long-poll timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// PDF output configuration
pub mod pdf {
    /// Resolution the page is laid out at; one pixel = 72 / DPI points
    pub const RESOLUTION_DPI: f32 = 100.0;

    /// Quality of the JPEG stream embedded in the page (1-100)
    pub const JPEG_QUALITY: u8 = 90;

    /// File name of the document sent back to the chat
    pub const OUTPUT_FILE_NAME: &str = "converted.pdf";
}

/// User-facing texts
pub mod messages {
    /// Reply to /start
    pub const WELCOME: &str = "Welcome to the image to pdf converter Telegram Bot that is magical!\n\
Just send the image you want to convert and watch the magic happen! built by @Kaleb_Mu";

    /// Sent when a photo could not be converted (see NOTIFY_ON_FAILURE)
    pub const CONVERSION_FAILED: &str =
        "Sorry, I couldn't turn that photo into a PDF. Please try sending it again.";
}
