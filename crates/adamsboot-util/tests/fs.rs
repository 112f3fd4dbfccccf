use std::fs;

use adamsboot_util::fs::{collect_jars, copy_into, ensure_dir, remove_dir_if_exists};
use tempfile::TempDir;

#[test]
fn ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("a").join("b");
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
    // second call is a no-op
    ensure_dir(&dir).unwrap();
}

#[test]
fn remove_dir_if_exists_tolerates_missing() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("lib");
    remove_dir_if_exists(&dir).unwrap();

    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("x.jar"), "").unwrap();
    remove_dir_if_exists(&dir).unwrap();
    assert!(!dir.exists());
}

#[test]
fn collect_jars_from_directory_is_sorted_and_filtered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("b.jar"), "").unwrap();
    fs::write(tmp.path().join("a.JAR"), "").unwrap();
    fs::write(tmp.path().join("readme.txt"), "").unwrap();
    fs::create_dir(tmp.path().join("nested.jar")).unwrap();

    let jars = collect_jars(tmp.path()).unwrap();
    let names: Vec<_> = jars
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.JAR", "b.jar"]);
}

#[test]
fn collect_jars_from_file_returns_it() {
    let tmp = TempDir::new().unwrap();
    let jar = tmp.path().join("custom.jar");
    fs::write(&jar, "").unwrap();
    assert_eq!(collect_jars(&jar).unwrap(), vec![jar]);
}

#[test]
fn copy_into_keeps_file_name() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let jar = src.path().join("custom.jar");
    fs::write(&jar, "bytes").unwrap();

    let copied = copy_into(&jar, dst.path()).unwrap();
    assert_eq!(copied, dst.path().join("custom.jar"));
    assert_eq!(fs::read_to_string(copied).unwrap(), "bytes");
}
