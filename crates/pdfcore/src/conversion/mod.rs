//! Media conversion engine
//!
//! Turns photo bytes received from a chat into a document that can be sent
//! back. Today that is a single conversion: any raster image → one-page PDF.

pub mod pdf;

use image::ImageFormat;

use crate::core::error::{ConvertError, ConvertResult};

/// Detects the raster format from the leading bytes.
///
/// The file name or MIME type reported by the provider is never trusted.
pub fn sniff_format(bytes: &[u8]) -> ConvertResult<ImageFormat> {
    image::guess_format(bytes).map_err(ConvertError::DecodeFailed)
}
