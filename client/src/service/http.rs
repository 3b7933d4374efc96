//! reqwest implementation of [`NotesService`].

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::NotesService;
use crate::config::{ClientConfig, FILE_FIELD};
use crate::error::{ExtractError, ExtractResult};
use crate::models::SelectedFile;

/// HTTP client for the notes extraction service.
#[derive(Debug, Clone)]
pub struct HttpNotesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpNotesClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(file: &SelectedFile<Vec<u8>>) -> ExtractResult<Form> {
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl NotesService<Vec<u8>> for HttpNotesClient {
    async fn extract(&self, file: &SelectedFile<Vec<u8>>) -> ExtractResult<Value> {
        log::debug!("POST {} ({}, {} bytes)", self.endpoint, file.name, file.content.len());

        // reqwest sets `multipart/form-data; boundary=...` for us
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(Self::form(file)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExtractError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
