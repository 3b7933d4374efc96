//! Browser-side implementations of the workflow's effects.
//!
//! # Services
//!
//! - [`extract`] - multipart upload to the notes extraction service (gloo-net)
//! - [`clipboard`] - Clipboard API with hidden-textarea fallback
//! - [`runner`] - dispatches events and runs the resulting effects

pub mod extract;
pub mod clipboard;
pub mod runner;

pub use extract::*;
pub use clipboard::*;
pub use runner::*;
