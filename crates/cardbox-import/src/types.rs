use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("The file is empty")]
    EmptyFile,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Unsupported file type \"{0}\". Please upload a .csv, .xls, or .xlsx file.")]
    UnsupportedExtension(String),
    #[error(
        "Could not find \"question\" and \"answer\" columns in the file. Please ensure your file has headers with these exact column names."
    )]
    HeaderNotFound,
    #[error("Row {row} is missing a question or answer. Please ensure all rows have both values.")]
    RowValidation { row: usize },
    #[error("No valid flashcards found in the file")]
    EmptyImport,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// One validated flashcard, ready for submission. Both fields are
/// non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDraft {
    pub question: String,
    pub answer: String,
}
