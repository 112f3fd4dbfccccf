//! Shared utilities for adamsboot.
//!
//! Cross-cutting concerns used by the other adamsboot crates: the error
//! type, data directory lookup, filesystem helpers, process spawning, and
//! terminal status output.

use std::path::{Path, PathBuf};

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;

/// Environment variable that overrides the data directory.
pub const HOME_DIR_ENV: &str = "ADAMSBOOT_HOME";

/// Returns the adamsboot data directory.
///
/// `$ADAMSBOOT_HOME` wins when set. Otherwise `~/.local/share/adamsboot`
/// on unix-like systems and `%USERPROFILE%\adamsboot` on Windows.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());

    if cfg!(windows) {
        Path::new(&home).join("adamsboot")
    } else {
        Path::new(&home).join(".local").join("share").join("adamsboot")
    }
}
