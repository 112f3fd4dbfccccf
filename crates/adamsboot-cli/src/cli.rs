//! CLI argument definitions for adamsboot.
//!
//! A single flat command surface defined with `clap` derive macros. Long
//! flags are kebab-case; the underscore spellings are accepted as aliases.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use adamsboot_core::request::{DEFAULT_MAIN_CLASS, DEFAULT_NAME};

#[derive(Parser, Debug)]
#[command(
    name = "adamsboot",
    version,
    disable_version_flag = true,
    about = "Bootstrap ADAMS applications by simply supplying the modules",
    long_about = "adamsboot assembles a runnable ADAMS application from a comma-separated list of \
                  modules: it resolves the modules into Maven coordinates, lets Maven download \
                  them into <output>/lib and generates launch scripts in <output>/bin."
)]
pub struct Cli {
    /// Directory of a local Maven installation (above "bin")
    #[arg(short = 'm', long = "maven-home", alias = "maven_home", value_name = "DIR", value_parser = existing_dir)]
    pub maven_home: Option<PathBuf>,

    /// Maven user settings to use instead of the downloaded ADAMS settings.xml
    #[arg(short = 'u', long = "maven-user-settings", alias = "maven_user_settings", value_name = "FILE", value_parser = existing_file)]
    pub maven_user_settings: Option<PathBuf>,

    /// Java home to use for the Maven execution
    #[arg(short = 'j', long = "java-home", alias = "java_home", value_name = "DIR", value_parser = existing_dir)]
    pub java_home: Option<PathBuf>,

    /// Alternative template for the pom.xml
    #[arg(short = 'p', long = "pom-template", alias = "pom_template", value_name = "FILE", value_parser = existing_file)]
    pub pom_template: Option<PathBuf>,

    /// Project name in the pom.xml, also used for the launch script names
    #[arg(short = 'n', long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Comma-separated list of ADAMS modules, e.g.: adams-weka,adams-groovy,adams-excel
    #[arg(short = 'M', long = "module", value_name = "MODULES", required_unless_present = "list_modules")]
    pub modules: Option<String>,

    /// ADAMS version to use, e.g. '20.1.1' or '20.2.0-SNAPSHOT'
    #[arg(short = 'V', long = "version", value_name = "VERSION", required_unless_present = "list_modules")]
    pub version: Option<String>,

    /// Additional Maven dependency (group:artifact:version), e.g.: nz.ac.waikato.cms.weka:kfGroovy:1.0.12
    #[arg(short = 'd', long = "dependency", value_name = "DEPENDENCY")]
    pub dependencies: Vec<String>,

    /// File with additional Maven dependencies, one group:artifact:version per line
    #[arg(short = 'D', long = "dependency-file", value_name = "FILE", value_parser = existing_file)]
    pub dependency_files: Vec<PathBuf>,

    /// External jar, or directory with jars, to include in the application
    #[arg(short = 'J', long = "external-jar", value_name = "JAR_OR_DIR", value_parser = existing_path)]
    pub external_jars: Vec<PathBuf>,

    /// Also download the source jars of all Maven artifacts (into <output>/src)
    #[arg(short = 's', long)]
    pub sources: bool,

    /// External source jar, or directory with source jars, to include
    #[arg(short = 'S', long = "external-source", value_name = "JAR_OR_DIR", value_parser = existing_path)]
    pub external_sources: Vec<PathBuf>,

    /// Directory to output the bootstrapped application in
    #[arg(short = 'o', long = "output-dir", alias = "output_dir", value_name = "DIR", required_unless_present = "list_modules")]
    pub output_dir: Option<PathBuf>,

    /// Run Maven's 'clean' goal and remove previous output first
    #[arg(short = 'C', long)]
    pub clean: bool,

    /// JVM parameter for the launch scripts (repeatable)
    #[arg(short = 'v', long = "jvm", value_name = "OPTION", allow_hyphen_values = true)]
    pub jvm: Vec<String>,

    /// Main class to launch in the scripts; empty to skip script generation
    #[arg(short = 'c', long = "main-class", alias = "main_class", value_name = "CLASSNAME", default_value = DEFAULT_MAIN_CLASS)]
    pub main_class: String,

    /// Print the currently available ADAMS modules (all other options are ignored)
    #[arg(short = 'l', long = "list-modules", alias = "list_modules")]
    pub list_modules: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Print the adamsboot version
    #[arg(long = "tool-version", action = ArgAction::Version)]
    pub tool_version: Option<bool>,
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file does not exist: {s}"))
    }
}

fn existing_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("directory does not exist: {s}"))
    }
}

fn existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("file or directory does not exist: {s}"))
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
