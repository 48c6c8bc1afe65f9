//! Catalog Export Integration Tests
//!
//! Tests the flat-file export format: one `<id>,<kind>,` line per item in
//! insertion order, truncation of existing files, and failure behavior on
//! unwritable destinations.

use std::fs;

use shelfmark::{Catalog, ExportError, Item};
use tempfile::TempDir;

#[test]
fn test_export_line_format_and_order() {
    let mut catalog = Catalog::new();
    catalog.add(Item::book(7, "Dune", "Herbert"));
    catalog.add(Item::magazine(9, "Wired", 42));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");
    catalog.save_to_file(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["7,book,", "9,magazine,"]);
}

#[test]
fn test_export_empty_catalog_is_zero_length() {
    let catalog = Catalog::new();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    catalog.save_to_file(&path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_export_duplicate_ids_all_written() {
    let mut catalog = Catalog::new();
    catalog.add(Item::book(1, "Dune", "Herbert"));
    catalog.add(Item::book(1, "Emma", "Austen"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.txt");
    catalog.save_to_file(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.lines().all(|line| line == "1,book,"));
}

#[test]
fn test_export_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");
    fs::write(&path, "stale contents\nmore stale contents\n").unwrap();

    let mut catalog = Catalog::new();
    catalog.add(Item::magazine(3, "Wired", 1));
    catalog.save_to_file(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "3,magazine,\n");
}

#[test]
fn test_export_to_unopenable_path_is_file_open_error() {
    let mut catalog = Catalog::new();
    catalog.add(Item::book(1, "Dune", "Herbert"));
    catalog.add(Item::magazine(2, "Wired", 42));

    // A directory cannot be opened for writing.
    let dir = TempDir::new().unwrap();
    let result = catalog.save_to_file(dir.path());

    assert!(matches!(result, Err(ExportError::FileOpen { .. })));
    // The failed export leaves the catalog untouched.
    assert_eq!(catalog.len(), 2);
}
