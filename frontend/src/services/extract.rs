//! Upload a PDF to the notes extraction service.

use gloo_net::http::Request;
use hvac_notes::{ClientConfig, ExtractError, ExtractResult, NotesService, SelectedFile, FILE_FIELD};
use serde_json::Value;
use web_sys::{File, FormData};

/// `gloo-net` client for `POST /api/extract-notes`.
#[derive(Debug, Clone)]
pub struct GlooNotesClient {
    endpoint: String,
}

impl GlooNotesClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.endpoint_url(),
        }
    }
}

impl NotesService<File> for GlooNotesClient {
    async fn extract(&self, file: &SelectedFile<File>) -> ExtractResult<Value> {
        let form_data = FormData::new()
            .map_err(|e| ExtractError::Request(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(FILE_FIELD, &file.content, &file.name)
            .map_err(|e| ExtractError::Request(format!("Failed to append file: {:?}", e)))?;

        log::debug!("POST {} ({})", self.endpoint, file.name);

        // The browser fills in `multipart/form-data; boundary=...` for FormData bodies
        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| ExtractError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExtractError::Status {
                status: response.status(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}
