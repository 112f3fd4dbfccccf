//! Dependency resolution: turns the requested modules and extra
//! dependencies into the ordered list of coordinates handed to the build.

use adamsboot_util::errors::BootstrapError;

use crate::coordinate::MavenCoordinate;
use crate::modules;

/// Maven group of all first-party ADAMS modules.
pub const MODULE_GROUP: &str = "nz.ac.waikato.cms.adams";

/// Ordered `group:artifact:version` strings: one per requested module in
/// input order, followed by the extra dependencies in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    coordinates: Vec<String>,
}

impl DependencySet {
    pub fn as_slice(&self) -> &[String] {
        &self.coordinates
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.coordinates.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl IntoIterator for DependencySet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

/// Expands module names into coordinates of a fixed group.
#[derive(Debug, Clone)]
pub struct DependencyResolver {
    group: String,
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new(MODULE_GROUP)
    }
}

impl DependencyResolver {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Resolve a comma-separated module list plus extra dependencies.
    ///
    /// Extra dependencies are appended verbatim; they are validated by the
    /// build, not here.
    pub fn resolve(
        &self,
        module_list: &str,
        version: &str,
        extra: &[String],
    ) -> Result<DependencySet, BootstrapError> {
        let names = modules::split_modules(module_list);
        if names.is_empty() {
            return Err(BootstrapError::configuration("No modules provided!"));
        }
        modules::check_conflicts(&names)?;

        let version = version.trim();
        if version.is_empty() {
            return Err(BootstrapError::configuration("No version provided!"));
        }

        let coordinates: Vec<String> = names
            .iter()
            .map(|name| MavenCoordinate::new(self.group.as_str(), *name, version).to_string())
            .chain(extra.iter().cloned())
            .collect();

        tracing::debug!(
            modules = names.len(),
            extra = extra.len(),
            "resolved {} coordinates",
            coordinates.len()
        );

        Ok(DependencySet { coordinates })
    }
}

/// Resolve with the default ADAMS module group.
pub fn resolve(
    module_list: &str,
    version: &str,
    extra: &[String],
) -> Result<DependencySet, BootstrapError> {
    DependencyResolver::default().resolve(module_list, version, extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_adams() {
        let set = resolve("adams-core", "20.1.1", &[]).unwrap();
        assert_eq!(
            set.as_slice(),
            &["nz.ac.waikato.cms.adams:adams-core:20.1.1".to_string()]
        );
    }

    #[test]
    fn blank_version_rejected() {
        let err = resolve("adams-core", "  ", &[]).unwrap_err();
        assert!(err.to_string().contains("No version provided"));
    }
}
