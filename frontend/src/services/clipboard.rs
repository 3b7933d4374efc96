//! Clipboard strategies for the browser.
//!
//! [`NavigatorClipboard`] uses `navigator.clipboard.writeText`, which needs a
//! secure context and permission. [`TextareaClipboard`] is the legacy path:
//! an off-screen textarea, select all, `document.execCommand("copy")`.

use hvac_notes::{ClipboardError, ClipboardResult, ClipboardWriter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Async Clipboard API.
pub struct NavigatorClipboard;

/// Hidden textarea + `execCommand("copy")`.
pub struct TextareaClipboard;

impl ClipboardWriter for NavigatorClipboard {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::Unavailable("no global window".into()))?;

        // Looked up dynamically: absent on insecure origins and older browsers
        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError::Unavailable(js_error_message(&e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable("navigator.clipboard is missing".into()));
        }

        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| ClipboardError::Unavailable(js_error_message(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ClipboardError::Unavailable("writeText is not a function".into()))?;

        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ClipboardError::Rejected("writeText did not return a promise".into()))?;

        JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))?;

        Ok(())
    }
}

impl ClipboardWriter for TextareaClipboard {
    fn name(&self) -> &'static str {
        "execCommand"
    }

    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ClipboardError::Unavailable("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::Unavailable("no document body".into()))?;

        let textarea: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|e| ClipboardError::Unavailable(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| ClipboardError::Unavailable("created element is not a textarea".into()))?;

        textarea.set_value(text);
        let _ = textarea.set_attribute("readonly", "");
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("left", "-9999px");
        let _ = style.set_property("opacity", "0");

        body.append_child(&textarea)
            .map_err(|e| ClipboardError::Unavailable(js_error_message(&e)))?;
        let _ = textarea.focus();
        textarea.select();

        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy"),
            None => Err(JsValue::from_str("execCommand is not supported")),
        };
        textarea.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::Rejected("execCommand(\"copy\") returned false".into())),
            Err(e) => Err(ClipboardError::Rejected(js_error_message(&e))),
        }
    }
}

/// Best-effort message from a thrown JS value.
fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
