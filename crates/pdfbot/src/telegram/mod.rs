//! Telegram bot integration
//!
//! Data flow: ingress (`webhook` or `schema` + polling) → `router` →
//! (`fetcher` → pdfcore encoder) → `sender`.

pub mod bot;
pub mod error;
pub mod fetcher;
pub mod router;
pub mod schema;
pub mod sender;
pub mod types;
pub mod webhook;

// Re-exports for convenience
pub use bot::{create_bot, create_http_client, setup_bot_commands, Command};
pub use error::{BotError, HandlerError};
pub use fetcher::{file_download_url, ImageFetcher, TelegramFileFetcher};
pub use router::{convert_photo, route, route_message, ConverterDeps, RouteOutcome};
pub use schema::{run_polling, schema};
pub use sender::{ReplySender, TelegramSender};
pub use types::{InboundUpdate, IncomingMessage, PhotoVariant};
pub use webhook::{create_webhook_router, run_webhook, webhook_path, AppState};
