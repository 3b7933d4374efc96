//! Glue between the page's workflow signal and the browser.
//!
//! Every UI event goes through [`dispatch`]; the effect returned by the
//! workflow is executed on the local executor and its outcome is fed back
//! through [`dispatch`] again.

use gloo_timers::future::TimeoutFuture;
use hvac_notes::{run_request, write_with_fallback, Effect, Event};
use leptos::*;
use web_sys::File;

use crate::config::client_config;
use crate::services::{GlooNotesClient, NavigatorClipboard, TextareaClipboard};
use crate::types::PageWorkflow;

/// Apply `event` to the workflow and run whatever it asks for.
pub fn dispatch(workflow: RwSignal<PageWorkflow>, event: Event<File>) {
    if let Some(effect) = workflow.try_update(|wf| wf.dispatch(event)).flatten() {
        run_effect(workflow, effect);
    }
}

fn run_effect(workflow: RwSignal<PageWorkflow>, effect: Effect<File>) {
    match effect {
        Effect::SendRequest { token, file } => {
            log::info!("📤 Uploading {}...", file.name);
            spawn_local(async move {
                let client = GlooNotesClient::new(&client_config());
                let event = run_request(&client, token, file).await;
                dispatch(workflow, event);
            });
        }
        Effect::WriteClipboard { token, text } => {
            spawn_local(async move {
                let copied = write_with_fallback(&NavigatorClipboard, &TextareaClipboard, &text).await;
                dispatch(workflow, Event::CopyFinished { token, copied });
            });
        }
        Effect::ScheduleCopyReset { token, after } => {
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(millis).await;
                dispatch(workflow, Event::CopyTimerElapsed { token });
            });
        }
    }
}
