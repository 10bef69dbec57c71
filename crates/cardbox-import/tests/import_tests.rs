use cardbox_import::*;
use std::io::Write;

fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_from_file() {
    let file = temp_csv("question,answer\nQ1,A1\nQ2,A2\nQ3,A3");
    let drafts = load_from_file(file.path()).await.unwrap();
    assert_eq!(drafts.len(), 3);
    assert_eq!(drafts[2].question, "Q3");
    assert_eq!(drafts[2].answer, "A3");
}

#[tokio::test]
async fn test_load_from_file_empty() {
    let file = temp_csv("");
    let result = load_from_file(file.path()).await;
    assert!(matches!(result, Err(ImportError::EmptyFile)));
}

#[tokio::test]
async fn test_load_from_file_unknown_extension() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(b"question,answer\nQ1,A1").unwrap();
    let result = load_from_file(file.path()).await;
    assert!(matches!(result, Err(ImportError::UnsupportedExtension(_))));
}

#[tokio::test]
async fn test_load_grid_preserves_cells() {
    let file = temp_csv("a,b\nc,d");
    let grid = load_grid(file.path()).await.unwrap();
    assert_eq!(grid, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[tokio::test]
async fn test_load_from_missing_file() {
    let result = load_from_file("no/such/file.csv").await;
    assert!(matches!(result, Err(ImportError::Io(_))));
}
