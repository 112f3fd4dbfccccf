//! Dependency declaration files: one `group:artifact:version` per line.
//!
//! Blank lines and lines starting with `#` are ignored.

use std::path::{Path, PathBuf};

use adamsboot_util::errors::BootstrapError;

/// Extract the dependency lines from file content, trimmed, in file order.
pub fn parse_dependency_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read a single dependency file.
pub fn read_dependency_file(path: &Path) -> miette::Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| BootstrapError::Generic {
        message: format!("Failed to read dependency file {}: {e}", path.display()),
    })?;
    let deps = parse_dependency_lines(&content);
    tracing::debug!("{} dependencies from {}", deps.len(), path.display());
    Ok(deps)
}

/// Read several dependency files, concatenating their entries in order.
pub fn read_dependency_files(paths: &[PathBuf]) -> miette::Result<Vec<String>> {
    let mut all = Vec::new();
    for path in paths {
        all.extend(read_dependency_file(path)?);
    }
    Ok(all)
}
