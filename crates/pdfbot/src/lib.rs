//! pdfbot - Telegram bot that answers a photo with a one-page PDF
//!
//! # Module Structure
//!
//! - `cli`: command-line interface (run the bot, convert a local file)
//! - `telegram`: update model, router, Telegram I/O and ingress adapters
//!
//! Fetching and PDF encoding live in the `pdfcore` crate.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod cli;
pub mod telegram;

// Re-export commonly used types for convenience
pub use telegram::{
    route, route_message, BotError, ConverterDeps, ImageFetcher, InboundUpdate, IncomingMessage, PhotoVariant,
    ReplySender, RouteOutcome,
};
