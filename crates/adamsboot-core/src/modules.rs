//! Module list handling: splitting the comma-separated list and detecting
//! modules that are requested both as LTS and as regular release.

use std::collections::HashSet;

use adamsboot_util::errors::BootstrapError;

/// Suffix that marks the long-term-support variant of a module.
pub const LTS_SUFFIX: &str = "-lts";

/// Split a comma-separated module list into trimmed names.
///
/// Blank entries (e.g. from a trailing comma) are dropped; input order is kept.
pub fn split_modules(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect()
}

/// Whether `name` denotes an LTS module.
pub fn is_lts(name: &str) -> bool {
    name.ends_with(LTS_SUFFIX)
}

/// The module name with a trailing LTS suffix removed.
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(LTS_SUFFIX).unwrap_or(name)
}

/// Non-LTS modules whose LTS variant is also present, in the order they
/// first appear in `modules`. Each name is reported once.
pub fn find_conflicts<'a>(modules: &[&'a str]) -> Vec<&'a str> {
    let lts_bases: HashSet<&str> = modules
        .iter()
        .copied()
        .filter(|m| is_lts(m))
        .map(base_name)
        .collect();

    let mut seen = HashSet::new();
    modules
        .iter()
        .copied()
        .filter(|m| !is_lts(m) && lts_bases.contains(m))
        .filter(|m| seen.insert(*m))
        .collect()
}

/// Fail if any module is requested in both its LTS and non-LTS form.
pub fn check_conflicts(modules: &[&str]) -> Result<(), BootstrapError> {
    let conflicts = find_conflicts(modules);
    if conflicts.is_empty() {
        return Ok(());
    }
    Err(BootstrapError::configuration(format!(
        "Following modules are present as LTS and non-LTS version: {}",
        conflicts.join(", ")
    )))
}
