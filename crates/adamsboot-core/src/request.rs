//! The per-invocation bootstrap request.

use std::path::PathBuf;

use crate::config::GlobalConfig;

/// Project name used when none is given.
pub const DEFAULT_NAME: &str = "adams";

/// Class launched by the generated scripts when none is given.
pub const DEFAULT_MAIN_CLASS: &str = "adams.gui.Main";

/// Everything needed to bootstrap one application. Built once from the
/// command line (plus global config) and not modified afterwards.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    /// Comma-separated module list.
    pub modules: String,
    /// ADAMS version applied to every module.
    pub version: String,
    pub output_dir: PathBuf,
    pub name: String,
    pub maven_home: Option<PathBuf>,
    /// Explicit settings.xml; the cached ADAMS one is used otherwise.
    pub maven_user_settings: Option<PathBuf>,
    pub java_home: Option<PathBuf>,
    pub pom_template: Option<PathBuf>,
    pub clean: bool,
    pub jvm: Vec<String>,
    /// Extra `group:artifact:version` dependencies.
    pub dependencies: Vec<String>,
    pub dependency_files: Vec<PathBuf>,
    pub external_jars: Vec<PathBuf>,
    pub sources: bool,
    pub external_sources: Vec<PathBuf>,
    /// `None` or blank disables launch script generation.
    pub main_class: Option<String>,
}

impl Default for BootstrapRequest {
    fn default() -> Self {
        Self {
            modules: String::new(),
            version: String::new(),
            output_dir: PathBuf::new(),
            name: DEFAULT_NAME.to_string(),
            maven_home: None,
            maven_user_settings: None,
            java_home: None,
            pom_template: None,
            clean: false,
            jvm: Vec::new(),
            dependencies: Vec::new(),
            dependency_files: Vec::new(),
            external_jars: Vec::new(),
            sources: false,
            external_sources: Vec::new(),
            main_class: Some(DEFAULT_MAIN_CLASS.to_string()),
        }
    }
}

impl BootstrapRequest {
    /// Fill Maven/Java homes from the global config where the command line
    /// left them unset.
    pub fn with_config_defaults(mut self, config: &GlobalConfig) -> Self {
        if self.maven_home.is_none() {
            self.maven_home = config.maven.home.clone();
        }
        if self.java_home.is_none() {
            self.java_home = config.java.home.clone();
        }
        self
    }

    /// The main class for launch scripts, if scripts should be generated.
    pub fn script_main_class(&self) -> Option<&str> {
        self.main_class
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
