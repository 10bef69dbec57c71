use async_trait::async_trait;
use cardbox_import::FlashcardDraft;
use reqwest::StatusCode;

use crate::FlashcardStore;
use crate::types::{
    BulkCreateRequest, BulkCreateResponse, BulkInsertReceipt, ErrorResponse, Result, StoreError,
};

/// Client for the flashcard manager's bulk-creation endpoint.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    fn bulk_url(&self) -> String {
        format!("{}/api/flashcards/bulk", self.base_url)
    }
}

#[async_trait]
impl FlashcardStore for HttpStore {
    async fn bulk_insert(
        &self,
        project_id: &str,
        drafts: &[FlashcardDraft],
    ) -> Result<BulkInsertReceipt> {
        if drafts.is_empty() {
            return Err(StoreError::EmptyBatch);
        }

        let url = self.bulk_url();
        tracing::debug!(%url, drafts = drafts.len(), "submitting bulk insert");

        let body = BulkCreateRequest {
            flashcards: drafts,
            project_id,
        };
        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::CREATED {
            let parsed: BulkCreateResponse = response.json().await?;
            return Ok(BulkInsertReceipt {
                count: parsed.count,
                message: parsed.message,
            });
        }

        // Failures carry a JSON {error} body; surface it verbatim.
        match response.json::<ErrorResponse>().await {
            Ok(parsed) => Err(StoreError::Rejected(parsed.error)),
            Err(_) => Err(StoreError::UnexpectedStatus(status)),
        }
    }
}
