//! Raw response JSON with a copy-to-clipboard button.

use hvac_notes::Event as WorkflowEvent;
use leptos::*;

use crate::services::dispatch;
use crate::types::PageWorkflow;

#[component]
pub fn ResultPanel(workflow: RwSignal<PageWorkflow>) -> impl IntoView {
    let copied = move || workflow.with(|wf| wf.copied());

    let on_copy = move |_| {
        dispatch(workflow, WorkflowEvent::CopyRequested);
    };

    view! {
        <div class="result-panel">
            <h2>"Response JSON"</h2>
            <div class="result-body">
                <button
                    class="copy-button"
                    class:copied=copied
                    aria-label="Copy JSON"
                    title="Copy JSON"
                    on:click=on_copy
                >
                    {move || if copied() { "Copied" } else { "Copy" }}
                </button>
                <pre class="result-json">
                    {move || workflow.with(|wf| wf.result_json().unwrap_or_default())}
                </pre>
            </div>
        </div>
    }
}
