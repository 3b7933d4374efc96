//! PDF selection and submission.
//!
//! The picker only filters on `application/pdf`; nothing downstream
//! checks the content.

use hvac_notes::{Event as WorkflowEvent, SelectedFile, PDF_MEDIA_TYPE};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::dispatch;
use crate::types::{PageWorkflow, StatusBanner};

#[component]
pub fn UploadSection(workflow: RwSignal<PageWorkflow>) -> impl IntoView {
    let is_loading = move || workflow.with(|wf| wf.is_loading());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // No file means the picker was cancelled
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile::new(file.name(), file.type_(), file));

        dispatch(workflow, WorkflowEvent::FileSelected(file));
    };

    let on_submit = move |_| {
        dispatch(workflow, WorkflowEvent::SubmitRequested);
    };

    view! {
        <div class="upload-section">
            <div class="upload-row">
                <label for="pdf-upload" class="upload-label">"PDF file"</label>
                <input
                    type="file"
                    id="pdf-upload"
                    accept=PDF_MEDIA_TYPE
                    aria-label="PDF file"
                    on:change=on_file_change
                />
            </div>

            <Show
                when=move || workflow.with(|wf| wf.selected_file().is_some())
                fallback=|| view! { }
            >
                <div class="selected-file">
                    "Selected file: "
                    <strong>{move || workflow.with(|wf| wf.file_name().to_string())}</strong>
                </div>
            </Show>

            <button
                class="btn btn-primary"
                on:click=on_submit
                disabled=is_loading
            >
                {move || if is_loading() { "Processing…" } else { "Get Notes" }}
            </button>

            {move || {
                workflow
                    .with(|wf| StatusBanner::from_status(wf.status()))
                    .map(|banner| view! {
                        <div role=banner.role() class=banner.css_class()>
                            {banner.text().to_string()}
                        </div>
                    })
            }}
        </div>
    }
}
