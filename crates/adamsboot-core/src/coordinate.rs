use std::fmt;

/// Maven coordinates: `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Parse `"group:artifact:version"` into coordinates.
    ///
    /// Surrounding whitespace is ignored; every part must be non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':').map(str::trim);
        let (group, artifact, version) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || group.is_empty() || artifact.is_empty() || version.is_empty()
        {
            return None;
        }
        Some(Self::new(group, artifact, version))
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
