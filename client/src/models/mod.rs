//! Domain models for the upload workflow.
//!
//! - [`SelectedFile`] - the file chosen in the picker
//! - [`ExtractionResult`] - the parsed JSON body returned by the service
//! - [`UiStatus`] - the workflow phase driving what is rendered

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PDF_MEDIA_TYPE;

// =============================================================================
// SelectedFile
// =============================================================================

/// A file chosen by the user.
///
/// `content` is whatever handle the platform gives us: raw bytes natively,
/// a `web_sys::File` in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    /// Declared filename (no directory part)
    pub name: String,
    /// Declared media type
    pub media_type: String,
    /// Platform file handle
    pub content: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: F) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Whether the declared media type is PDF.
    pub fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

impl SelectedFile<Vec<u8>> {
    /// Build a selection from a path on disk, guessing the media type from
    /// the extension.
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        Self::new(name, media_type_for(path), bytes)
    }
}

/// Media type for a path, as far as the picker filter cares.
pub fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
        _ => "application/octet-stream",
    }
}

// =============================================================================
// ExtractionResult
// =============================================================================

/// Full JSON body returned by the notes extraction service.
///
/// No schema is enforced; `text` is the only field read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult(pub Value);

impl ExtractionResult {
    /// The `text` field, or an empty string when absent or not a string.
    pub fn notes_text(&self) -> &str {
        self.0.get("text").and_then(Value::as_str).unwrap_or("")
    }

    /// Two-space indented JSON, as displayed and copied.
    pub fn to_pretty_json(&self) -> String {
        // Serializing a Value cannot fail
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ExtractionResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// =============================================================================
// UiStatus
// =============================================================================

/// Workflow phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiStatus {
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    Success,
    /// Failure with its user-facing message
    Error(String),
}

impl UiStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UiStatus::Success)
    }

    /// Message to render in the alert region, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
