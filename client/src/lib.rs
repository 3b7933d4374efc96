//! # HVAC Notes - upload workflow core
//!
//! Sends a PDF to the notes extraction service and tracks everything the
//! page renders: the selected file, the returned notes, the raw JSON, and
//! the Idle / Loading / Success / Error phase.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  Event   ┌───────────────┐  Effect  ┌──────────────────┐
//! │ UI / CLI     │─────────▶│ NotesWorkflow │─────────▶│ NotesService     │
//! │ (host)       │◀─────────│ (state)       │          │ ClipboardWriter  │
//! └──────────────┘  render  └───────────────┘          │ timers           │
//!                                  ▲                   └────────┬─────────┘
//!                                  └──── Event (outcome) ───────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hvac_notes::{ClientConfig, Effect, HttpNotesClient, NotesWorkflow, SelectedFile, run_request};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpNotesClient::new(&ClientConfig::default());
//!     let mut workflow = NotesWorkflow::new();
//!     workflow.select_file(Some(SelectedFile::new("plan.pdf", "application/pdf", bytes)));
//!     if let Some(Effect::SendRequest { token, file }) = workflow.submit() {
//!         let event = run_request(&client, token, file).await;
//!         workflow.dispatch(event);
//!     }
//!     println!("{}", workflow.notes());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy
//! - [`config`] - Base URL, endpoint and UI constants
//! - [`models`] - SelectedFile, ExtractionResult, UiStatus
//! - [`workflow`] - State holder and reducer
//! - [`service`] - Notes extraction service trait (and reqwest client)
//! - [`clipboard`] - Clipboard strategies with fallback

pub mod error;
pub mod config;
pub mod models;
pub mod workflow;
pub mod service;
pub mod clipboard;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ClipboardError, ClipboardResult,
    ConfigError, ConfigResult,
    ExtractError, ExtractResult,
};

pub use config::{
    ClientConfig,
    BASE_URL_ENV, DEFAULT_BASE_URL, EXTRACT_NOTES_PATH, FILE_FIELD, PDF_MEDIA_TYPE,
    COPIED_INDICATOR_DURATION,
    FETCH_FAILED_MESSAGE, NO_FILE_MESSAGE, SUCCESS_MESSAGE,
};

pub use models::{ExtractionResult, SelectedFile, UiStatus};

pub use workflow::{CopyToken, Effect, Event, NotesWorkflow, RequestToken};

pub use service::{run_request, NotesService};

#[cfg(feature = "native")]
pub use service::HttpNotesClient;

pub use clipboard::{write_with_fallback, ClipboardWriter};
