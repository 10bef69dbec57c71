use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cardbox_import::FlashcardDraft;

use crate::FlashcardStore;
use crate::types::{BulkInsertReceipt, Result, StoreError};

/// In-memory store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<HashMap<String, Vec<FlashcardDraft>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flashcards stored under a project, in insertion order.
    pub fn flashcards(&self, project_id: &str) -> Vec<FlashcardDraft> {
        self.projects
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl FlashcardStore for MemoryStore {
    async fn bulk_insert(
        &self,
        project_id: &str,
        drafts: &[FlashcardDraft],
    ) -> Result<BulkInsertReceipt> {
        if drafts.is_empty() {
            return Err(StoreError::EmptyBatch);
        }

        let mut projects = self.projects.lock().unwrap();
        projects
            .entry(project_id.to_string())
            .or_default()
            .extend(drafts.iter().cloned());

        Ok(BulkInsertReceipt {
            count: drafts.len() as u64,
            message: "Flashcards created successfully".to_string(),
        })
    }
}
