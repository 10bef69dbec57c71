use cardbox_import::*;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn test_header_any_case_any_column() {
    let g = grid(&[&["", "ANSWER", "Question"]]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.row, 0);
    assert_eq!(header.question_col, 2);
    assert_eq!(header.answer_col, 1);
}

#[test]
fn test_header_token_order_does_not_matter() {
    let g = grid(&[&["answer", "question"]]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.question_col, 1);
    assert_eq!(header.answer_col, 0);
}

#[test]
fn test_header_surrounded_by_other_columns() {
    let g = grid(&[
        &["My deck", "", ""],
        &["id", "Question", "notes", "Answer"],
    ]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.row, 1);
    assert_eq!(header.question_col, 1);
    assert_eq!(header.answer_col, 3);
}

#[test]
fn test_header_cells_are_trimmed() {
    let g = grid(&[&["  Question  ", " AnSwEr "]]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.question_col, 0);
    assert_eq!(header.answer_col, 1);
}

#[test]
fn test_header_requires_exact_token() {
    // Substring or decorated matches do not count.
    let g = grid(&[&["the question", "answer?"]]);
    let result = locate_headers(&g);
    match result {
        Err(ImportError::HeaderNotFound) => {}
        other => panic!("Expected HeaderNotFound, got {other:?}"),
    }
}

#[test]
fn test_header_on_last_scanned_row() {
    let mut rows: Vec<Vec<String>> = (0..9).map(|_| vec!["filler".to_string()]).collect();
    rows.push(vec!["question".to_string(), "answer".to_string()]);
    let header = locate_headers(&rows).unwrap();
    assert_eq!(header.row, 9);
}

#[test]
fn test_header_beyond_scan_window_fails() {
    let mut rows: Vec<Vec<String>> = (0..HEADER_SCAN_ROWS)
        .map(|_| vec!["filler".to_string()])
        .collect();
    rows.push(vec!["question".to_string(), "answer".to_string()]);
    let result = locate_headers(&rows);
    match result {
        Err(ImportError::HeaderNotFound) => {}
        other => panic!("Expected HeaderNotFound, got {other:?}"),
    }
}

#[test]
fn test_one_token_missing_fails() {
    let g = grid(&[&["question", "reply"]]);
    assert!(matches!(
        locate_headers(&g),
        Err(ImportError::HeaderNotFound)
    ));
}

#[test]
fn test_duplicate_labels_first_occurrence_wins() {
    let g = grid(&[&["question", "question", "answer", "answer"]]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.question_col, 0);
    assert_eq!(header.answer_col, 2);
}

#[test]
fn test_tokens_in_different_rows_keep_later_row() {
    // "question" in row 0, "answer" in row 1: the scan completes at
    // row 1 and extraction starts after it.
    let g = grid(&[&["question"], &["answer"]]);
    let header = locate_headers(&g).unwrap();
    assert_eq!(header.row, 1);
    assert_eq!(header.question_col, 0);
    assert_eq!(header.answer_col, 0);
}

#[test]
fn test_empty_grid_has_no_header() {
    let result = locate_headers(&[]);
    assert!(matches!(result, Err(ImportError::HeaderNotFound)));
}
