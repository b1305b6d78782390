//! Unified error types for FrigateReview.
//!
//! All fallible operations throughout the codebase return `Result<T, FrigateReviewError>`.
//! Query failures are stored as display strings in the cache, so every
//! variant must render an actionable message on its own.

/// Unified error type used throughout FrigateReview.
#[derive(Debug, thiserror::Error)]
pub enum FrigateReviewError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Server returned {status} for {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// A response body was not valid JSON for the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A snapshot or thumbnail could not be decoded.
    #[error("Image decode error: {0}")]
    Image(String),

    /// The configured server address is unusable.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Frigate+ refused a submission; carries the server's message.
    #[error("Frigate+ rejected the submission: {0}")]
    Plus(String),

    /// Saving a downloaded image failed.
    #[error("Download failed: {0}")]
    Download(String),

    /// Catch-all for I/O errors (file writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrigateReviewError>;

/// Build a [`FrigateReviewError::Status`] for the given response status and URL.
pub fn status_err(status: u16, url: impl Into<String>) -> FrigateReviewError {
    FrigateReviewError::Status {
        status,
        url: url.into(),
    }
}
