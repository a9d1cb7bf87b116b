use pdfcore::ConvertError;
use thiserror::Error;

/// Errors that end the processing of a single update
///
/// Nothing here is retried: the error is logged, optionally reported to the
/// chat, and surfaced to the ingress adapter.
#[derive(Error, Debug)]
pub enum BotError {
    /// Download, decode or PDF encoding failed
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// getFile did not return a path for the file reference
    #[error("Failed to resolve file {file_id}: {reason}")]
    FileLookup { file_id: String, reason: String },

    /// The download URL built from the Bot API URL and file path is invalid
    #[error("Invalid file URL: {0}")]
    FileUrl(#[from] url::ParseError),

    /// sendMessage / sendDocument failed
    #[error("Failed to send reply: {0}")]
    SendFailed(String),
}

impl BotError {
    /// True for failures that happen before anything is sent back, i.e. the
    /// user never got their PDF because the photo could not be converted.
    pub fn is_conversion_failure(&self) -> bool {
        !matches!(self, BotError::SendFailed(_))
    }

    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Convert(e) => e.kind(),
            BotError::FileLookup { .. } => "file_lookup",
            BotError::FileUrl(_) => "file_url",
            BotError::SendFailed(_) => "send_failed",
        }
    }
}

/// Error type for dispatcher handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
