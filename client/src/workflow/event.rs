//! Events fed into the workflow and effects it asks the host to perform.

use std::time::Duration;

use serde_json::Value;

use crate::error::ExtractResult;
use crate::models::SelectedFile;

/// Generation of a submitted request.
///
/// A response is applied only if it carries the token of the request
/// currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub(crate) u64);

/// Generation of a "Copied" confirmation; stale timers carry an old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CopyToken(pub(crate) u64);

/// Everything that can happen to the workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<F> {
    /// The picker changed; `None` when the user cancelled it.
    FileSelected(Option<SelectedFile<F>>),
    /// The submit button was pressed.
    SubmitRequested,
    /// A request finished, successfully or not.
    ResponseReceived {
        token: RequestToken,
        outcome: ExtractResult<Value>,
    },
    /// The copy button was pressed.
    CopyRequested,
    /// The clipboard chain finished; `copied` is false when every strategy failed.
    CopyFinished { token: CopyToken, copied: bool },
    /// The "Copied" timer fired.
    CopyTimerElapsed { token: CopyToken },
}

/// Side effects the host runs on behalf of the workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    /// POST `file` to the extraction endpoint, then report
    /// [`Event::ResponseReceived`] with the same token.
    SendRequest {
        token: RequestToken,
        file: SelectedFile<F>,
    },
    /// Write `text` through the clipboard chain, then report
    /// [`Event::CopyFinished`] with the same token.
    WriteClipboard { token: CopyToken, text: String },
    /// Wait `after`, then report [`Event::CopyTimerElapsed`].
    ScheduleCopyReset { token: CopyToken, after: Duration },
}
