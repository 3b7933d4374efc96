//! Client configuration.
//!
//! The only tunable is the base URL of the notes extraction service.
//! Natively it comes from `HVAC_NOTES_API_BASE_URL` (a `.env` file is
//! honoured); the WASM frontend bakes the same variable in at compile time.

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Placeholder address used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "HVAC_NOTES_API_BASE_URL";

/// Path of the extraction endpoint, relative to the base URL.
pub const EXTRACT_NOTES_PATH: &str = "/api/extract-notes";

/// Multipart field carrying the PDF.
pub const FILE_FIELD: &str = "file";

/// Media type accepted by the file picker.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// How long the "Copied" confirmation stays visible.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(1500);

/// Shown when submit is pressed without a file.
pub const NO_FILE_MESSAGE: &str = "Please select a PDF file first.";

/// Shown for every transport or server failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch notes. Please try again.";

/// Shown in the status region after a successful extraction.
pub const SUCCESS_MESSAGE: &str = "Success! Notes extracted.";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize a base URL (trailing slashes are dropped).
    pub fn new(base_url: impl AsRef<str>) -> ConfigResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Load from the environment (and `.env`), falling back to the default.
    #[cfg(feature = "native")]
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the extraction endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, EXTRACT_NOTES_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
