//! Transport client for the document service.
//!
//! Three operations: generate a document, list the history, save a document
//! to Google Drive. Every response travels in the `{status, data, message}`
//! envelope and is narrowed into a `Result` here; callers only ever see
//! [`ApiError`] with a displayable message. Transport detail goes to the
//! console log and nowhere else.

use super::config::ApiConfig;
use contracts::document::{
    ApiError, ApiResponse, CreateDocumentRequest, Document, DocumentDraft, ErrorBody, ListResult,
};
use contracts::filters::ListFilters;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const GENERATE_FALLBACK: &str = "Failed to generate document";
const LIST_FALLBACK: &str = "Failed to fetch documents";
const DRIVE_FALLBACK: &str = "Failed to save to Google Drive";

#[derive(Clone)]
pub struct DocumentApi {
    base_url: String,
}

impl DocumentApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    /// `POST /generate-document` with the date already normalized to
    /// `DD-MM-YYYY`. The server assigns id, content and timestamps.
    pub async fn generate(&self, draft: &DocumentDraft) -> Result<Document, ApiError> {
        let body = CreateDocumentRequest::from_draft(draft);
        let request = Request::post(&format!("{}/generate-document", self.base_url))
            .json(&body)
            .map_err(|e| transport_error("generate-document", &e, GENERATE_FALLBACK))?;
        let response = request
            .send()
            .await
            .map_err(|e| transport_error("generate-document", &e, GENERATE_FALLBACK))?;
        decode(response, GENERATE_FALLBACK).await
    }

    /// `GET /documents?...` — page and limit are always forwarded, name and
    /// date only when non-empty/valid.
    pub async fn list(&self, filters: &ListFilters) -> Result<ListResult, ApiError> {
        let url = format!(
            "{}/documents?{}",
            self.base_url,
            query_string(&filters.cleaned())
        );
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| transport_error("documents", &e, LIST_FALLBACK))?;
        decode(response, LIST_FALLBACK).await
    }

    /// `POST /documents/{id}/save-to-google` — returns the updated document
    /// carrying `google_doc_id`/`doc_url`.
    pub async fn save_to_drive(&self, document_id: i64) -> Result<Document, ApiError> {
        let url = format!("{}/documents/{}/save-to-google", self.base_url, document_id);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| transport_error("save-to-google", &e, DRIVE_FALLBACK))?;
        decode(response, DRIVE_FALLBACK).await
    }
}

fn query_string(filters: &ListFilters) -> String {
    serde_qs::to_string(filters).unwrap_or_else(|e| {
        log::error!("failed to serialize list filters: {e}");
        String::new()
    })
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    if !response.ok() {
        log::error!("request failed with HTTP {}", response.status());
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|m| !m.is_empty());
        return Err(ApiError::new(
            message.unwrap_or_else(|| fallback.to_string()),
        ));
    }

    let envelope = response.json::<ApiResponse<T>>().await.map_err(|e| {
        log::error!("failed to decode response body: {e}");
        ApiError::new(fallback)
    })?;
    envelope.into_result(fallback)
}

fn transport_error(operation: &str, err: &gloo_net::Error, fallback: &str) -> ApiError {
    log::error!("{operation} request failed: {err}");
    ApiError::new(fallback)
}
