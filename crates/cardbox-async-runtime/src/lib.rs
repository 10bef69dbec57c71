mod worker;

use std::path::PathBuf;

// Re-export types from library crates
pub use cardbox_import::{FlashcardDraft, ImportError};
pub use cardbox_store::{BulkInsertReceipt, FlashcardStore, StoreError};
pub use worker::{run_import, worker_task};

/// Commands sent from the UI to the import worker
#[derive(Debug)]
pub enum ImportCommand {
    ImportFile {
        input_path: PathBuf,
        project_id: String,
    },
}

/// Lifecycle of one import attempt. Every attempt ends back at
/// `Idle`, re-submittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Idle,
    Parsing,
    Validating,
    Submitting,
}

/// Updates sent from the worker back to the UI
#[derive(Debug, Clone)]
pub enum ImportUpdate {
    PhaseChanged {
        phase: ImportPhase,
    },
    /// Parse and validation succeeded; submission is about to start.
    DraftsReady {
        count: usize,
    },
    ImportComplete {
        count: u64,
        message: String,
    },
    /// First failure of the attempt, message verbatim. Terminal; the
    /// attempt is never retried.
    Error {
        message: String,
    },
}
