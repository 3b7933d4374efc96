//! Application configuration.
//!
//! The service base URL is baked in at build time from
//! `HVAC_NOTES_API_BASE_URL` (e.g. `HVAC_NOTES_API_BASE_URL=http://10.0.0.5:8000 trunk build`).
//! Without it the page targets the placeholder local address.

use hvac_notes::{ClientConfig, DEFAULT_BASE_URL};

/// Notes extraction service base URL.
pub const API_BASE_URL: &str = match option_env!("HVAC_NOTES_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

/// Page title.
pub const APP_NAME: &str = "HVAC Notes Extractor";

/// Resolved client configuration.
///
/// An invalid build-time URL falls back to the default with a warning.
pub fn client_config() -> ClientConfig {
    ClientConfig::new(API_BASE_URL).unwrap_or_else(|e| {
        log::warn!("Ignoring API base URL '{}': {}", API_BASE_URL, e);
        ClientConfig::default()
    })
}
