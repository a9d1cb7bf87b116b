use thiserror::Error;

/// Errors produced while turning a photo into a PDF.
///
/// Every variant is terminal for the update being processed: nothing is
/// retried and no partial output is returned.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The photo URL answered with a non-success status
    #[error("Photo download failed with status: {status}")]
    FetchFailed { status: reqwest::StatusCode },

    /// Transport-level failure while downloading (DNS, TLS, timeout, body read).
    /// Built through `From`, which drops the request URL.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The bytes are not a raster format the image library recognizes
    #[error("Failed to decode image: {0}")]
    DecodeFailed(#[source] image::ImageError),

    /// The decoded image could not be written as a PDF page
    #[error("Failed to encode PDF: {0}")]
    EncodeFailed(String),
}

impl ConvertError {
    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::FetchFailed { .. } => "fetch_failed",
            ConvertError::Http(_) => "http",
            ConvertError::DecodeFailed(_) => "decode_failed",
            ConvertError::EncodeFailed(_) => "encode_failed",
        }
    }
}

/// File URLs carry the bot token in their path, so the URL reqwest attaches
/// to its errors is removed before the error can be logged or displayed.
impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        ConvertError::Http(err.without_url())
    }
}

impl From<lopdf::Error> for ConvertError {
    fn from(err: lopdf::Error) -> Self {
        ConvertError::EncodeFailed(err.to_string())
    }
}

/// Type alias for Result with ConvertError
pub type ConvertResult<T> = Result<T, ConvertError>;
