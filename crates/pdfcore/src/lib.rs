//! pdfcore - image fetching and PDF encoding for pdfbot
//!
//! Everything here is independent of Telegram so it can be reused by the
//! offline `convert` command and tested without a bot.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `download`: HTTP fetching of photo bytes
//! - `conversion`: image → single-page PDF encoding

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod conversion;
pub mod core;
pub mod download;

// Re-export commonly used types for convenience
pub use conversion::pdf::{image_to_pdf, image_to_pdf_with, PdfOptions};
pub use core::{config, ConvertError, ConvertResult};
pub use download::fetch_image;
