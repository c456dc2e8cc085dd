//! Unit tests for input file discovery

use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), "").unwrap();
}

fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn finds_csv_files_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "c.csv");
    touch(&dir, "a.csv");
    touch(&dir, "b.csv");

    let files = discover_input_files(dir.path()).unwrap();
    assert_eq!(names(&files), ["a.csv", "b.csv", "c.csv"]);
}

#[test]
fn empty_directory_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let files = discover_input_files(dir.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn ignores_other_extensions() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "listings.csv");
    touch(&dir, "notes.txt");
    touch(&dir, "listings.csv.bak");

    let files = discover_input_files(dir.path()).unwrap();
    assert_eq!(names(&files), ["listings.csv"]);
}

#[test]
fn excludes_the_summary_file() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.csv");
    touch(&dir, OUTPUT_FILE);

    let files = discover_input_files(dir.path()).unwrap();
    assert_eq!(names(&files), ["a.csv"]);
}

#[test]
fn ignores_directories_matching_the_pattern() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.csv");
    fs::create_dir(dir.path().join("batch.csv")).unwrap();

    let files = discover_input_files(dir.path()).unwrap();
    assert_eq!(names(&files), ["a.csv"]);
}

#[test]
fn does_not_recurse_into_subdirectories() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.csv");
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("b.csv"), "").unwrap();

    let files = discover_input_files(dir.path()).unwrap();
    assert_eq!(names(&files), ["a.csv"]);
}
