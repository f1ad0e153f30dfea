use crate::dates;
use serde::{Deserialize, Serialize};

// ============================================================================
// Template type
// ============================================================================

/// Document template selected in the generation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Receipt,
    Invoice,
    Contract,
}

impl TemplateType {
    pub const ALL: [TemplateType; 3] = [
        TemplateType::Receipt,
        TemplateType::Invoice,
        TemplateType::Contract,
    ];

    /// Wire value, also used as the `<option>` value in the form select.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Receipt => "receipt",
            TemplateType::Invoice => "invoice",
            TemplateType::Contract => "contract",
        }
    }

    /// Human-readable label for the form select.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::Receipt => "Receipt",
            TemplateType::Invoice => "Invoice",
            TemplateType::Contract => "Contract",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "invoice" => TemplateType::Invoice,
            "contract" => TemplateType::Contract,
            _ => TemplateType::Receipt,
        }
    }
}

// ============================================================================
// Draft (client-owned, transient)
// ============================================================================

/// Unsaved document request held by the generation form.
///
/// `date` stays in the UI format (`YYYY-MM-DD`) until the request body is
/// built; the validator checks it in that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub template_type: TemplateType,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            amount: 0.0,
            template_type: TemplateType::Receipt,
        }
    }
}

/// Request body for `POST /generate-document`.
///
/// The server expects the date already normalized to `DD-MM-YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub template_type: TemplateType,
}

impl CreateDocumentRequest {
    pub fn from_draft(draft: &DocumentDraft) -> Self {
        Self {
            name: draft.name.clone(),
            date: dates::to_api_format(&draft.date),
            amount: draft.amount,
            template_type: draft.template_type,
        }
    }
}

// ============================================================================
// Document (server-owned, read-only on the client)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub template_type: TemplateType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub doc_url: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub google_doc_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of the document history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResult {
    #[serde(default)]
    pub items: Vec<Document>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform `{status, data, message}` wrapper around every remote response.
///
/// Decoded once at the transport boundary and immediately narrowed into a
/// `Result` via [`ApiResponse::into_result`]; callers never branch on the
/// raw envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Narrow the envelope into a tagged result.
    ///
    /// A business error carries the server's `message` verbatim when present,
    /// otherwise `fallback`. A success envelope without a payload is treated
    /// as a malformed response.
    pub fn into_result(self, fallback: &str) -> Result<T, ApiError> {
        match self.status {
            ResponseStatus::Success => self
                .data
                .ok_or_else(|| ApiError::new("Invalid response format from server")),
            ResponseStatus::Error => Err(ApiError::new(
                self.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

/// Error payload returned by the service on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

/// Single error kind for every failed remote call.
///
/// Transport failures, HTTP errors and business errors all collapse into a
/// human-readable message; transport detail never reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
