//! Rendering of the page for each workflow phase.
//!
//! Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use hvac_notes::{Effect, ExtractError, SelectedFile, FETCH_FAILED_MESSAGE, SUCCESS_MESSAGE};
use hvac_notes_frontend::{NotesPage, PageWorkflow};
use leptos::*;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, File, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_page() -> (RwSignal<PageWorkflow>, HtmlElement) {
    let container = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document().body().unwrap().append_child(&container).unwrap();

    let workflow = create_rw_signal(PageWorkflow::new());
    mount_to(container.clone(), move || view! { <NotesPage workflow=workflow/> });
    (workflow, container)
}

fn pdf(name: &str) -> SelectedFile<File> {
    let parts = js_sys::Array::of1(&"%PDF-1.7 dummy".into());
    let file = File::new_with_str_sequence(&parts, name).unwrap();
    SelectedFile::new(name, "application/pdf", file)
}

/// Select a file and submit it; the request itself is never sent.
fn start_request(workflow: RwSignal<PageWorkflow>) -> hvac_notes::RequestToken {
    workflow
        .try_update(|wf| {
            wf.select_file(Some(pdf("test.pdf")));
            match wf.submit() {
                Some(Effect::SendRequest { token, .. }) => token,
                other => panic!("expected SendRequest, got {:?}", other),
            }
        })
        .unwrap()
}

fn find(container: &HtmlElement, selector: &str) -> Option<Element> {
    container.query_selector(selector).unwrap()
}

fn text_of(container: &HtmlElement, selector: &str) -> String {
    find(container, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

async fn render() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn test_idle_page() {
    let (_workflow, container) = mount_page();
    render().await;

    let button = find(&container, "button.btn-primary").unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Get Notes"));
    assert!(!button.has_attribute("disabled"));

    let picker = find(&container, "input#pdf-upload").unwrap();
    assert_eq!(picker.get_attribute("accept").as_deref(), Some("application/pdf"));
    assert_eq!(picker.get_attribute("aria-label").as_deref(), Some("PDF file"));

    assert!(find(&container, "[role=alert]").is_none());
    assert!(find(&container, "[role=status]").is_none());
    assert!(find(&container, ".notes-panel").is_none());
    assert!(find(&container, ".result-panel").is_none());
}

#[wasm_bindgen_test]
async fn test_loading_disables_button() {
    let (workflow, container) = mount_page();
    start_request(workflow);
    render().await;

    let button = find(&container, "button.btn-primary").unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Processing…"));
    assert!(button.has_attribute("disabled"));
    assert_eq!(text_of(&container, ".selected-file"), "Selected file: test.pdf");
}

#[wasm_bindgen_test]
async fn test_success_shows_notes_and_json() {
    let (workflow, container) = mount_page();
    let token = start_request(workflow);
    workflow.update(|wf| wf.response_received(token, Ok(json!({ "text": "X" }))));
    render().await;

    assert_eq!(text_of(&container, "[role=status]"), SUCCESS_MESSAGE);
    assert!(find(&container, "[role=alert]").is_none());
    assert_eq!(text_of(&container, ".notes-text"), "X");
    assert_eq!(text_of(&container, ".result-json"), "{\n  \"text\": \"X\"\n}");
    assert_eq!(text_of(&container, ".copy-button"), "Copy");

    let button = find(&container, "button.btn-primary").unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Get Notes"));
    assert!(!button.has_attribute("disabled"));
}

#[wasm_bindgen_test]
async fn test_empty_notes_hide_notes_panel() {
    let (workflow, container) = mount_page();
    let token = start_request(workflow);
    workflow.update(|wf| wf.response_received(token, Ok(json!({ "pages": 0 }))));
    render().await;

    assert!(find(&container, ".notes-panel").is_none());
    assert!(find(&container, ".result-panel").is_some());
}

#[wasm_bindgen_test]
async fn test_failure_shows_alert() {
    let (workflow, container) = mount_page();
    let token = start_request(workflow);
    workflow.update(|wf| {
        wf.response_received(token, Err(ExtractError::Transport("offline".into())))
    });
    render().await;

    assert_eq!(text_of(&container, "[role=alert]"), FETCH_FAILED_MESSAGE);
    assert!(find(&container, "[role=status]").is_none());
    assert!(find(&container, ".notes-panel").is_none());
    assert!(find(&container, ".result-panel").is_none());
}
