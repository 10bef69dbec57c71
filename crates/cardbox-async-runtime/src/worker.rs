use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{ImportCommand, ImportPhase, ImportUpdate};
use cardbox_store::FlashcardStore;

/// Async worker task that processes import commands and sends updates
pub async fn worker_task(
    store: Arc<dyn FlashcardStore>,
    mut command_rx: mpsc::UnboundedReceiver<ImportCommand>,
    update_tx: mpsc::UnboundedSender<ImportUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, store.as_ref(), &update_tx).await;
    }
}

async fn process_command(
    cmd: ImportCommand,
    store: &dyn FlashcardStore,
    update_tx: &mpsc::UnboundedSender<ImportUpdate>,
) {
    match cmd {
        ImportCommand::ImportFile {
            input_path,
            project_id,
        } => {
            run_import(&input_path, &project_id, store, update_tx).await;
        }
    }
}

/// Runs one import end to end: parse, validate, submit. The first
/// failure aborts the attempt and is reported verbatim; either way
/// the phase returns to idle afterwards.
pub async fn run_import(
    input_path: &Path,
    project_id: &str,
    store: &dyn FlashcardStore,
    update_tx: &mpsc::UnboundedSender<ImportUpdate>,
) {
    let phase = |phase: ImportPhase| {
        let _ = update_tx.send(ImportUpdate::PhaseChanged { phase });
    };
    let fail = |message: String| {
        tracing::debug!(%message, "import failed");
        let _ = update_tx.send(ImportUpdate::Error { message });
        let _ = update_tx.send(ImportUpdate::PhaseChanged {
            phase: ImportPhase::Idle,
        });
    };

    phase(ImportPhase::Parsing);
    let grid = match cardbox_import::load_grid(input_path).await {
        Ok(grid) => grid,
        Err(e) => return fail(e.to_string()),
    };

    phase(ImportPhase::Validating);
    let drafts = match cardbox_import::validate_grid(&grid) {
        Ok(drafts) => drafts,
        Err(e) => return fail(e.to_string()),
    };
    let _ = update_tx.send(ImportUpdate::DraftsReady {
        count: drafts.len(),
    });

    phase(ImportPhase::Submitting);
    match store.bulk_insert(project_id, &drafts).await {
        Ok(receipt) => {
            tracing::debug!(count = receipt.count, "import complete");
            let _ = update_tx.send(ImportUpdate::ImportComplete {
                count: receipt.count,
                message: receipt.message,
            });
            phase(ImportPhase::Idle);
        }
        Err(e) => fail(e.to_string()),
    }
}
