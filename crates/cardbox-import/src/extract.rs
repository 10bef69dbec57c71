use crate::header::HeaderLocation;
use crate::types::{FlashcardDraft, ImportError, Result};

/// Walks the rows after the header and turns them into drafts.
///
/// Fully blank rows are skipped. A row with exactly one of the two
/// fields aborts the whole import with the offending 1-based row
/// number; no partial results are returned.
pub fn extract_drafts(grid: &[Vec<String>], header: HeaderLocation) -> Result<Vec<FlashcardDraft>> {
    let mut drafts = Vec::new();

    for (i, row) in grid.iter().enumerate().skip(header.row + 1) {
        let question = row
            .get(header.question_col)
            .map(|cell| cell.trim())
            .unwrap_or("");
        let answer = row
            .get(header.answer_col)
            .map(|cell| cell.trim())
            .unwrap_or("");

        if question.is_empty() && answer.is_empty() {
            continue;
        }
        if question.is_empty() || answer.is_empty() {
            return Err(ImportError::RowValidation { row: i + 1 });
        }

        drafts.push(FlashcardDraft {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    if drafts.is_empty() {
        return Err(ImportError::EmptyImport);
    }

    Ok(drafts)
}
