//! UI Components for the HVAC Notes Extractor page.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the target service
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF picker, submit button and status line
//! - [`NotesPanel`] - Extracted notes text
//! - [`ResultPanel`] - Raw response JSON with copy button

mod header;
mod hero;
mod upload;
mod notes;
mod result;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use notes::*;
pub use result::*;
pub use footer::*;
