//! View-side types.
//!
//! - [`PageWorkflow`] - the workflow specialised to browser file handles
//! - [`StatusBanner`] - what the status region shows

use hvac_notes::{NotesWorkflow, UiStatus, SUCCESS_MESSAGE};
use web_sys::File;

/// Workflow state held by the page.
pub type PageWorkflow = NotesWorkflow<File>;

/// Content of the status region under the submit button.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusBanner {
    /// Red `role="alert"` line
    Alert(String),
    /// Green `role="status"` line
    Success,
}

impl StatusBanner {
    /// Banner for a workflow phase; Idle and Loading show nothing.
    pub fn from_status(status: &UiStatus) -> Option<Self> {
        match status {
            UiStatus::Error(msg) => Some(StatusBanner::Alert(msg.clone())),
            UiStatus::Success => Some(StatusBanner::Success),
            UiStatus::Idle | UiStatus::Loading => None,
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            StatusBanner::Alert(_) => "alert",
            StatusBanner::Success => "status",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBanner::Alert(_) => "error-message",
            StatusBanner::Success => "success-message",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StatusBanner::Alert(msg) => msg,
            StatusBanner::Success => SUCCESS_MESSAGE,
        }
    }
}
