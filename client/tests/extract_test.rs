//! End-to-end tests against a mock notes extraction service.

#![cfg(feature = "native")]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use hvac_notes::{
    run_request, ClientConfig, Effect, ExtractError, HttpNotesClient, NotesWorkflow,
    SelectedFile, UiStatus, FETCH_FAILED_MESSAGE,
};
use serde_json::{json, Value};

// =============================================================================
// Mock service
// =============================================================================

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode, &'static str),
    Raw(&'static str),
}

#[derive(Debug, Clone)]
struct UploadedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    parts: Arc<Mutex<Vec<UploadedPart>>>,
    request_content_type: Arc<Mutex<Option<String>>>,
}

async fn extract_notes(
    State(state): State<MockState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    *state.request_content_type.lock().unwrap() = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        state.parts.lock().unwrap().push(UploadedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }

    match state.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(code, body) => (code, body).into_response(),
        Reply::Raw(body) => (StatusCode::OK, body).into_response(),
    }
}

async fn spawn_service(reply: Reply) -> (ClientConfig, MockState) {
    let state = MockState {
        reply,
        parts: Arc::new(Mutex::new(Vec::new())),
        request_content_type: Arc::new(Mutex::new(None)),
    };
    let app = Router::new()
        .route("/api/extract-notes", post(extract_notes))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (config_for(addr), state)
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(format!("http://{}", addr)).unwrap()
}

// =============================================================================
// Helpers
// =============================================================================

fn write_pdf(dir: &Path, name: &str) -> SelectedFile<Vec<u8>> {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4 dummy content").unwrap();
    let bytes = std::fs::read(&path).unwrap();
    SelectedFile::from_path_bytes(&path, bytes)
}

async fn select_and_submit(config: &ClientConfig, file: SelectedFile<Vec<u8>>) -> NotesWorkflow<Vec<u8>> {
    let client = HttpNotesClient::new(config);
    let mut workflow = NotesWorkflow::new();
    workflow.select_file(Some(file));

    match workflow.submit() {
        Some(Effect::SendRequest { token, file }) => {
            assert!(workflow.is_loading());
            let event = run_request(&client, token, file).await;
            workflow.dispatch(event);
        }
        other => panic!("expected SendRequest, got {:?}", other),
    }
    workflow
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_upload_and_display_notes() {
    let dir = tempfile::tempdir().unwrap();
    let (config, state) = spawn_service(Reply::Json(json!({ "text": "X" }))).await;

    let workflow = select_and_submit(&config, write_pdf(dir.path(), "test.pdf")).await;

    assert_eq!(workflow.file_name(), "test.pdf");
    assert_eq!(workflow.status(), &UiStatus::Success);
    assert_eq!(workflow.notes(), "X");
    assert_eq!(workflow.result_json().as_deref(), Some("{\n  \"text\": \"X\"\n}"));

    let parts = state.parts.lock().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "file");
    assert_eq!(parts[0].file_name.as_deref(), Some("test.pdf"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(parts[0].data, b"%PDF-1.4 dummy content");

    let content_type = state.request_content_type.lock().unwrap().clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_full_response_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "text": "These are the extracted notes.",
        "pages": 4,
        "sections": ["General", "Mechanical"]
    });
    let (config, _state) = spawn_service(Reply::Json(body.clone())).await;

    let workflow = select_and_submit(&config, write_pdf(dir.path(), "unit-3.pdf")).await;

    assert_eq!(workflow.notes(), "These are the extracted notes.");
    assert_eq!(workflow.result().map(|r| r.as_value()), Some(&body));
    assert_eq!(
        workflow.result_json(),
        Some(serde_json::to_string_pretty(&body).unwrap())
    );
}

#[tokio::test]
async fn test_missing_text_field() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _state) = spawn_service(Reply::Json(json!({ "pages": 1 }))).await;

    let workflow = select_and_submit(&config, write_pdf(dir.path(), "test.pdf")).await;

    assert_eq!(workflow.status(), &UiStatus::Success);
    assert_eq!(workflow.notes(), "");
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _state) =
        spawn_service(Reply::Status(StatusCode::UNPROCESSABLE_ENTITY, "not a pdf")).await;

    let workflow = select_and_submit(&config, write_pdf(dir.path(), "test.pdf")).await;

    assert_eq!(workflow.status(), &UiStatus::Error(FETCH_FAILED_MESSAGE.to_string()));
    assert!(workflow.result().is_none());
    assert_eq!(workflow.notes(), "");
    assert_eq!(
        workflow.last_failure(),
        Some(&ExtractError::Status { status: 422, body: "not a pdf".into() })
    );
}

#[tokio::test]
async fn test_malformed_body_is_generic() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _state) = spawn_service(Reply::Raw("<html>oops</html>")).await;

    let workflow = select_and_submit(&config, write_pdf(dir.path(), "test.pdf")).await;

    assert_eq!(workflow.status().error_message(), Some(FETCH_FAILED_MESSAGE));
    assert!(matches!(workflow.last_failure(), Some(ExtractError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_unreachable_service() {
    let dir = tempfile::tempdir().unwrap();

    // Grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let workflow = select_and_submit(&config_for(addr), write_pdf(dir.path(), "test.pdf")).await;

    assert_eq!(workflow.status().error_message(), Some(FETCH_FAILED_MESSAGE));
    assert!(workflow.result().is_none());
    assert!(matches!(workflow.last_failure(), Some(ExtractError::Transport(_))));
}

#[tokio::test]
async fn test_no_file_issues_no_request() {
    let (config, state) = spawn_service(Reply::Json(json!({ "text": "X" }))).await;
    let client = HttpNotesClient::new(&config);
    let mut workflow: NotesWorkflow<Vec<u8>> = NotesWorkflow::new();

    // Execute whatever the workflow asks for, exactly as the CLI does
    let effect = workflow.submit();
    assert_eq!(effect, None);
    if let Some(Effect::SendRequest { token, file }) = effect {
        let event = run_request(&client, token, file).await;
        workflow.dispatch(event);
    }

    assert!(workflow.status().error_message().is_some());
    assert_eq!(workflow.last_failure(), Some(&ExtractError::NoFileSelected));
    assert!(state.parts.lock().unwrap().is_empty());
    assert!(state.request_content_type.lock().unwrap().is_none());
}
