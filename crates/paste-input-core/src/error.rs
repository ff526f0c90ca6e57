//! Error types for paste-input operations.

use thiserror::Error;

/// Result type for paste-input operations
pub type PasteResult<T> = std::result::Result<T, PasteError>;

/// Errors that can occur while reading, classifying, or staging clipboard content
#[derive(Error, Debug)]
pub enum PasteError {
    /// Platform clipboard backend error (GTK, Win32, clipboard-rs, ...)
    #[error("backend error: {0}")]
    Backend(String),

    /// Image decode error
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// Image encode error
    #[error("image encode error: {0}")]
    ImageEncode(String),

    /// Rejected an empty payload for the given MIME type
    #[error("empty payload for {0}")]
    EmptyPayload(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PasteError {
    /// Returns true if this error indicates an undecodable candidate.
    ///
    /// Format errors never abort a clipboard check; the classifier skips the
    /// candidate and moves on to the next category.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::ImageDecode(_) | Self::ImageEncode(_) | Self::EmptyPayload(_)
        )
    }
}
