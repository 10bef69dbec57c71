mod decode;
mod extract;
mod header;
mod types;

pub use decode::{FileFormat, decode_grid};
pub use extract::extract_drafts;
pub use header::{HEADER_SCAN_ROWS, HeaderLocation, locate_headers};
pub use types::{FlashcardDraft, ImportError, Result};

use std::path::Path;

/// Locates the header columns and extracts validated drafts from a
/// decoded grid.
pub fn validate_grid(grid: &[Vec<String>]) -> Result<Vec<FlashcardDraft>> {
    let header = locate_headers(grid)?;
    extract_drafts(grid, header)
}

/// Decodes and validates in one step. Handy when the grid itself is
/// not needed.
pub fn parse_bytes(bytes: &[u8], format: FileFormat) -> Result<Vec<FlashcardDraft>> {
    let grid = decode_grid(bytes, format)?;
    if grid.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    validate_grid(&grid)
}

/// Reads a file and decodes it into a grid, inferring the format from
/// the extension.
pub async fn load_grid(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref().to_owned();
    let format = FileFormat::from_path(&path)?;

    // Read file async
    let bytes = tokio::fs::read(&path).await?;

    // Decoding is CPU-bound, spawn blocking
    let grid = tokio::task::spawn_blocking(move || decode_grid(&bytes, format)).await??;

    if grid.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    Ok(grid)
}

/// Reads, decodes, and validates a file end to end.
pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<FlashcardDraft>> {
    let grid = load_grid(path).await?;
    validate_grid(&grid)
}
