use cardbox_import::FlashcardDraft;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server-side rejection; carries the `{error}` body verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from server (status {0})")]
    UnexpectedStatus(reqwest::StatusCode),
    #[error("Flashcards array is required and must not be empty")]
    EmptyBatch,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Outcome of a successful bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkInsertReceipt {
    pub count: u64,
    pub message: String,
}

/// Request body for the bulk-creation endpoint.
#[derive(Debug, Serialize)]
pub struct BulkCreateRequest<'a> {
    pub flashcards: &'a [FlashcardDraft],
    #[serde(rename = "projectId")]
    pub project_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct BulkCreateResponse {
    pub count: u64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
