use crate::types::{ImportError, Result};

/// Rows scanned before giving up on header detection.
pub const HEADER_SCAN_ROWS: usize = 10;

/// Where the "question" and "answer" columns were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    /// Row index at which the scan completed. Data extraction starts
    /// on the next row.
    pub row: usize,
    pub question_col: usize,
    pub answer_col: usize,
}

/// Scans the first [`HEADER_SCAN_ROWS`] rows, row-major, for cells
/// whose trimmed lower-cased text is exactly "question" or "answer".
/// The first occurrence of each token wins; later duplicates are
/// ignored.
pub fn locate_headers(grid: &[Vec<String>]) -> Result<HeaderLocation> {
    let mut header_row = 0;
    let mut question_col = None;
    let mut answer_col = None;

    for (i, row) in grid.iter().take(HEADER_SCAN_ROWS).enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let cell = cell.trim().to_lowercase();
            if cell == "question" && question_col.is_none() {
                question_col = Some(j);
                header_row = i;
            }
            if cell == "answer" && answer_col.is_none() {
                answer_col = Some(j);
                header_row = i;
            }
        }

        if question_col.is_some() && answer_col.is_some() {
            break;
        }
    }

    match (question_col, answer_col) {
        (Some(question_col), Some(answer_col)) => Ok(HeaderLocation {
            row: header_row,
            question_col,
            answer_col,
        }),
        _ => Err(ImportError::HeaderNotFound),
    }
}
