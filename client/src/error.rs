//! Error types for the notes extraction workflow.
//!
//! - [`ExtractError`] - submission failures (input, transport, server, decoding)
//! - [`ClipboardError`] - clipboard strategy failures
//! - [`ConfigError`] - invalid client configuration
//!
//! Only [`ExtractError::NoFileSelected`] is shown to the user verbatim.
//! Every other submission failure is collapsed to
//! [`FETCH_FAILED_MESSAGE`](crate::config::FETCH_FAILED_MESSAGE) and kept
//! around for diagnostics.

use thiserror::Error;

use crate::config::{FETCH_FAILED_MESSAGE, NO_FILE_MESSAGE};

// =============================================================================
// Extraction Errors
// =============================================================================

/// Errors raised while submitting a file to the notes extraction service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// Submit was triggered without a selected file.
    #[error("No file selected")]
    NoFileSelected,

    /// The request never produced a response (connectivity, CORS, DNS...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The multipart request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ExtractError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::NoFileSelected => NO_FILE_MESSAGE,
            _ => FETCH_FAILED_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::InvalidResponse(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ExtractError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ExtractError::Request(err.to_string())
        } else {
            ExtractError::Transport(err.to_string())
        }
    }
}

// =============================================================================
// Clipboard Errors
// =============================================================================

/// Errors from a single clipboard strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    /// The platform does not offer this clipboard mechanism.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The mechanism exists but refused the write (permissions, focus).
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in client configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Base URL is empty.
    #[error("Base URL must not be empty")]
    EmptyBaseUrl,

    /// Base URL does not use http or https.
    #[error("Base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for extraction requests.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type for clipboard writes.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
