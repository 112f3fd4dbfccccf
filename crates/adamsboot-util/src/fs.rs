use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// `path` made absolute against the current directory.
///
/// The path need not exist and symlinks are left alone.
pub fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Remove a directory tree if it exists. Missing directories are not an error.
pub fn remove_dir_if_exists(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Expand a path into the jar files it denotes.
///
/// A file is returned as-is. A directory yields every `*.jar` directly
/// inside it (not recursive), sorted by name.
pub fn collect_jars(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut jars = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let p = entry?.path();
        let is_jar = p
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"));
        if p.is_file() && is_jar {
            jars.push(p);
        }
    }
    jars.sort();
    Ok(jars)
}

/// Copy `file` into `dir`, keeping its file name. Returns the destination.
pub fn copy_into(file: &Path, dir: &Path) -> std::io::Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} has no file name", file.display()),
        )
    })?;
    let dest = dir.join(name);
    std::fs::copy(file, &dest)?;
    Ok(dest)
}

/// Mark a file as executable for everyone (no-op on non-unix platforms).
#[cfg(unix)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
