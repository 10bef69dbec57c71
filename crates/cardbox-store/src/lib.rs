mod http;
mod memory;
mod types;

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use types::{
    BulkCreateRequest, BulkCreateResponse, BulkInsertReceipt, ErrorResponse, Result, StoreError,
};

use async_trait::async_trait;
use cardbox_import::FlashcardDraft;

/// Project-scoped flashcard persistence.
///
/// `bulk_insert` is all-or-nothing: either every draft is stored under
/// the project and the inserted count comes back, or the whole batch
/// fails.
#[async_trait]
pub trait FlashcardStore: Send + Sync {
    async fn bulk_insert(
        &self,
        project_id: &str,
        drafts: &[FlashcardDraft],
    ) -> Result<BulkInsertReceipt>;
}
