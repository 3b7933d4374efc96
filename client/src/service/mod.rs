//! Notes extraction service seam.
//!
//! [`NotesService`] is implemented by [`HttpNotesClient`] (reqwest, native)
//! and by the frontend's `gloo-net` client. [`run_request`] turns a
//! [`Effect::SendRequest`](crate::workflow::Effect::SendRequest) into the
//! matching [`Event::ResponseReceived`].

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpNotesClient;

use serde_json::Value;

use crate::error::ExtractResult;
use crate::models::SelectedFile;
use crate::workflow::{Event, RequestToken};

/// Something that can turn a PDF into an extraction result.
#[allow(async_fn_in_trait)]
pub trait NotesService<F> {
    /// POST `file` as multipart field `file` and parse the JSON reply.
    ///
    /// Any non-success status must be reported as an error.
    async fn extract(&self, file: &SelectedFile<F>) -> ExtractResult<Value>;
}

/// Execute one request and wrap the outcome for the workflow.
pub async fn run_request<F, S>(service: &S, token: RequestToken, file: SelectedFile<F>) -> Event<F>
where
    S: NotesService<F>,
{
    let outcome = service.extract(&file).await;
    Event::ResponseReceived { token, outcome }
}
