use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::types::{ImportError, Result};

/// Declared source format, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text (`.csv`)
    Csv,
    /// Generic spreadsheet workbook (`.xls`, `.xlsx`), first sheet only
    Workbook,
}

impl FileFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("xls") | Some("xlsx") => Ok(FileFormat::Workbook),
            _ => Err(ImportError::UnsupportedExtension(
                path.display().to_string(),
            )),
        }
    }
}

/// Decodes raw bytes into a uniform grid of cell text. No semantic
/// validation happens here; blanks come through as empty strings.
pub fn decode_grid(bytes: &[u8], format: FileFormat) -> Result<Vec<Vec<String>>> {
    match format {
        FileFormat::Csv => decode_csv(bytes),
        FileFormat::Workbook => decode_workbook(bytes),
    }
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(position) = record.position() {
            // The reader drops fully blank lines; restore them so row
            // numbers in validation errors match the file.
            while (grid.len() as u64) + 1 < position.line() {
                grid.push(Vec::new());
            }
        }
        grid.push(record.iter().map(str::to_string).collect());
    }

    Ok(grid)
}

fn decode_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)?;

    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;

    let grid = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(grid)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
