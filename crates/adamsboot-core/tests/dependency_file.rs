use std::fs;

use adamsboot_core::dependency_file::{read_dependency_file, read_dependency_files};
use tempfile::TempDir;

#[test]
fn reads_files_in_order() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first.txt");
    let second = tmp.path().join("second.txt");
    fs::write(&first, "a:b:1\n# comment\nc:d:2\n").unwrap();
    fs::write(&second, "\ne:f:3\n").unwrap();

    let deps = read_dependency_files(&[first, second]).unwrap();
    assert_eq!(deps, vec!["a:b:1", "c:d:2", "e:f:3"]);
}

#[test]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_dependency_file(&tmp.path().join("nope.txt")).unwrap_err();
    assert!(err.to_string().contains("Failed to read dependency file"));
}

#[test]
fn no_files_gives_nothing() {
    assert!(read_dependency_files(&[]).unwrap().is_empty());
}
