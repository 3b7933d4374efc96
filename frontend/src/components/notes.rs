//! Extracted notes panel

use leptos::*;

use crate::types::PageWorkflow;

#[component]
pub fn NotesPanel(workflow: RwSignal<PageWorkflow>) -> impl IntoView {
    view! {
        <div class="notes-panel">
            <h2>"Extracted Notes"</h2>
            <pre class="notes-text">
                {move || workflow.with(|wf| wf.notes().to_string())}
            </pre>
        </div>
    }
}
