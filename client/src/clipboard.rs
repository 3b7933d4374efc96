//! Clipboard strategies.
//!
//! The browser has two ways to put text on the clipboard: the async
//! Clipboard API and the legacy `execCommand("copy")` on a hidden
//! textarea. Each is a [`ClipboardWriter`]; [`write_with_fallback`] tries
//! them in order.

use crate::error::ClipboardResult;

/// One way of writing text to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Try `primary`, then `fallback`. Returns whether either succeeded.
///
/// Failures are only logged; callers never surface them.
pub async fn write_with_fallback<P, B>(primary: &P, fallback: &B, text: &str) -> bool
where
    P: ClipboardWriter,
    B: ClipboardWriter,
{
    match primary.write_text(text).await {
        Ok(()) => return true,
        Err(e) => log::debug!("{} clipboard failed: {}, trying {}", primary.name(), e, fallback.name()),
    }

    match fallback.write_text(text).await {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{} clipboard failed: {}", fallback.name(), e);
            false
        }
    }
}
