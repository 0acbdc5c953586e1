//! Error types for ThousandEyes API operations.

use thiserror::Error;

/// Errors that can occur during ThousandEyes API operations.
#[derive(Debug, Error)]
pub enum ThousandEyesError {
    /// Configuration is missing or incomplete.
    #[error("ThousandEyes configuration required: {0}")]
    ConfigMissing(String),

    /// The API responded with a status other than the one documented
    /// for the operation.
    #[error("unexpected response code {status} (expected {expected}): {message}")]
    UnexpectedStatus {
        expected: u16,
        status: u16,
        message: String,
    },

    /// The API envelope contained no results where exactly one was expected.
    #[error("empty result set in API response envelope")]
    EmptyEnvelope,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON body could not be encoded or decoded. Covers malformed
    /// response shapes and wire-boolean fields holding values other than
    /// `0` or `1`.
    #[error("failed to process JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// Result type alias for ThousandEyes operations.
pub type Result<T> = core::result::Result<T, ThousandEyesError>;
