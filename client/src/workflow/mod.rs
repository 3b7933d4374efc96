//! Upload-and-render workflow.
//!
//! [`NotesWorkflow`] owns every piece of transient UI state and is the
//! only thing allowed to mutate it. Hosts (the Leptos page, the CLI, tests)
//! feed it [`Event`]s and execute the [`Effect`]s it returns.
//!
//! ```text
//! Idle ──submit (no file)──▶ Error
//! Idle ──submit──▶ Loading ──ok──▶ Success
//!                          └─err─▶ Error
//! Success / Error ──submit──▶ Loading
//! any ──selectFile──▶ Idle
//! ```

mod event;

pub use event::{CopyToken, Effect, Event, RequestToken};

use serde_json::Value;

use crate::config::COPIED_INDICATOR_DURATION;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{ExtractionResult, SelectedFile, UiStatus};

/// State holder for the upload client.
#[derive(Debug, Clone)]
pub struct NotesWorkflow<F> {
    file: Option<SelectedFile<F>>,
    result: Option<ExtractionResult>,
    notes: String,
    status: UiStatus,
    copied: bool,
    last_failure: Option<ExtractError>,
    in_flight: Option<RequestToken>,
    request_generation: u64,
    copy_generation: u64,
}

impl<F> Default for NotesWorkflow<F> {
    fn default() -> Self {
        Self {
            file: None,
            result: None,
            notes: String::new(),
            status: UiStatus::Idle,
            copied: false,
            last_failure: None,
            in_flight: None,
            request_generation: 0,
            copy_generation: 0,
        }
    }
}

impl<F> NotesWorkflow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.file.as_ref()
    }

    /// Name of the selected file, empty when nothing is selected.
    pub fn file_name(&self) -> &str {
        self.file.as_ref().map(|f| f.name.as_str()).unwrap_or("")
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    /// Pretty-printed result for the JSON region.
    pub fn result_json(&self) -> Option<String> {
        self.result.as_ref().map(ExtractionResult::to_pretty_json)
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn status(&self) -> &UiStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Structured cause of the last failed submission.
    pub fn last_failure(&self) -> Option<&ExtractError> {
        self.last_failure.as_ref()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replace the selection and reset everything derived from it.
    ///
    /// A request still in flight is superseded; its response is dropped.
    pub fn select_file(&mut self, file: Option<SelectedFile<F>>) {
        match &file {
            Some(f) => log::debug!("Selected file {} ({})", f.name, f.media_type),
            None => log::debug!("File selection cleared"),
        }
        self.file = file;
        self.clear_outcome();
        self.in_flight = None;
        self.status = UiStatus::Idle;
    }

    /// Apply the outcome of a request.
    ///
    /// Ignored unless `token` identifies the request currently in flight.
    pub fn response_received(&mut self, token: RequestToken, outcome: ExtractResult<Value>) {
        if self.in_flight != Some(token) {
            log::debug!("Discarding stale response for request {:?}", token);
            return;
        }
        self.in_flight = None;

        match outcome {
            Ok(body) => {
                // A `null` body is a success with nothing to show or copy
                let result = Some(body)
                    .filter(|body| !body.is_null())
                    .map(ExtractionResult);
                self.notes = result
                    .as_ref()
                    .map(|r| r.notes_text().to_string())
                    .unwrap_or_default();
                self.result = result;
                self.last_failure = None;
                self.status = UiStatus::Success;
                log::debug!("Extraction succeeded ({} chars of notes)", self.notes.len());
            }
            Err(err) => {
                log::warn!("Extraction failed: {}", err);
                self.status = UiStatus::Error(err.user_message().to_string());
                self.last_failure = Some(err);
                self.notes.clear();
                self.result = None;
            }
        }
    }

    /// Ask for the current result to be copied as formatted JSON.
    ///
    /// Returns `None`, touching nothing, when there is no result.
    pub fn copy_result_as_json(&mut self) -> Option<Effect<F>> {
        let text = self.result_json()?;
        self.copy_generation += 1;
        Some(Effect::WriteClipboard {
            token: CopyToken(self.copy_generation),
            text,
        })
    }

    /// Record the outcome of the clipboard chain started with `token`.
    ///
    /// Ignored when the result was replaced, or another copy started,
    /// while the write was pending.
    pub fn copy_finished(&mut self, token: CopyToken, copied: bool) -> Option<Effect<F>> {
        if token.0 != self.copy_generation {
            log::debug!("Discarding stale clipboard completion {:?}", token);
            return None;
        }
        if !copied {
            log::debug!("Clipboard copy failed on every strategy");
            self.copied = false;
            return None;
        }
        self.copied = true;
        Some(Effect::ScheduleCopyReset {
            token,
            after: COPIED_INDICATOR_DURATION,
        })
    }

    /// Clear the "Copied" flag if `token` is the latest copy.
    pub fn copy_timer_elapsed(&mut self, token: CopyToken) {
        if token.0 == self.copy_generation {
            self.copied = false;
        }
    }

    fn clear_outcome(&mut self) {
        self.result = None;
        self.notes.clear();
        self.last_failure = None;
        self.copied = false;
        // Invalidate any pending clipboard write or "Copied" timer
        self.copy_generation += 1;
    }
}

impl<F: Clone> NotesWorkflow<F> {
    /// Start an extraction for the selected file.
    ///
    /// Without a file this moves to [`UiStatus::Error`] and returns no
    /// effect. While a request is in flight it does nothing.
    pub fn submit(&mut self) -> Option<Effect<F>> {
        if self.in_flight.is_some() {
            log::debug!("Submit ignored, request already in flight");
            return None;
        }

        let Some(file) = self.file.clone() else {
            let err = ExtractError::NoFileSelected;
            self.status = UiStatus::Error(err.user_message().to_string());
            self.last_failure = Some(err);
            return None;
        };

        self.clear_outcome();
        self.request_generation += 1;
        let token = RequestToken(self.request_generation);
        self.in_flight = Some(token);
        self.status = UiStatus::Loading;
        log::debug!("Submitting {} as request {:?}", file.name, token);

        Some(Effect::SendRequest { token, file })
    }

    /// Reducer entry point: apply `event`, return the effect to run.
    pub fn dispatch(&mut self, event: Event<F>) -> Option<Effect<F>> {
        match event {
            Event::FileSelected(file) => {
                self.select_file(file);
                None
            }
            Event::SubmitRequested => self.submit(),
            Event::ResponseReceived { token, outcome } => {
                self.response_received(token, outcome);
                None
            }
            Event::CopyRequested => self.copy_result_as_json(),
            Event::CopyFinished { token, copied } => self.copy_finished(token, copied),
            Event::CopyTimerElapsed { token } => {
                self.copy_timer_elapsed(token);
                None
            }
        }
    }
}
