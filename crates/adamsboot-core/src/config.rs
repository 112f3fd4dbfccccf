use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use adamsboot_util::errors::BootstrapError;

/// Where the ADAMS Maven user settings are downloaded from.
pub const DEFAULT_SETTINGS_URL: &str =
    "https://raw.githubusercontent.com/waikato-datamining/adams-website/master/files/resources/settings.xml";

/// Built-in module catalogs (parent POMs listing the available modules).
pub const DEFAULT_CATALOGS: [(&str, &str); 4] = [
    (
        "adams-base",
        "https://raw.githubusercontent.com/waikato-datamining/adams-base/master/pom.xml",
    ),
    (
        "adams-addons",
        "https://raw.githubusercontent.com/waikato-datamining/adams-addons/master/pom.xml",
    ),
    (
        "adams-lts",
        "https://raw.githubusercontent.com/waikato-datamining/adams-lts/master/pom.xml",
    ),
    (
        "adams-spectral-base",
        "https://raw.githubusercontent.com/waikato-datamining/adams-spectral-base/master/pom.xml",
    ),
];

/// Global user configuration loaded from `<data dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub maven: MavenConfig,

    #[serde(default)]
    pub java: JavaConfig,

    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<CatalogEntry>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            maven: MavenConfig::default(),
            java: JavaConfig::default(),
            catalogs: default_catalogs(),
        }
    }
}

/// Maven settings from `[maven]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MavenConfig {
    #[serde(default)]
    pub home: Option<PathBuf>,
    #[serde(default = "default_settings_url", rename = "settings-url")]
    pub settings_url: String,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            home: None,
            settings_url: default_settings_url(),
        }
    }
}

fn default_settings_url() -> String {
    DEFAULT_SETTINGS_URL.to_string()
}

/// Java settings from `[java]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JavaConfig {
    #[serde(default)]
    pub home: Option<PathBuf>,
}

/// A named module catalog from `[[catalogs]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

fn default_catalogs() -> Vec<CatalogEntry> {
    DEFAULT_CATALOGS
        .iter()
        .map(|(name, url)| CatalogEntry {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| BootstrapError::Generic {
            message: format!("Failed to read config {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            BootstrapError::Generic {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        adamsboot_util::data_dir().join("config.toml")
    }
}
