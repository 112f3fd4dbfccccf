//! Operation: bootstrap an application from ADAMS modules.
//!
//! Resolves the requested modules into coordinates, obtains the Maven user
//! settings and the POM template, then hands everything to a
//! [`BuildDelegate`].

use std::path::Path;

use adamsboot_core::config::GlobalConfig;
use adamsboot_core::request::BootstrapRequest;
use adamsboot_core::resolver;
use adamsboot_maven::{download, settings};
use adamsboot_util::errors::BootstrapError;
use adamsboot_util::progress::{spinner, status, status_info};

use crate::delegate::{BuildDelegate, BuildPlan, DEFAULT_POM_TEMPLATE};

/// Content of the POM template: the given file, or the built-in one.
pub fn load_pom_template(path: Option<&Path>) -> miette::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| {
            BootstrapError::Generic {
                message: format!("Failed to read pom.xml template {}: {e}", p.display()),
            }
            .into()
        }),
        None => Ok(DEFAULT_POM_TEMPLATE.to_string()),
    }
}

/// Run the whole bootstrap for `request`.
pub async fn bootstrap(
    request: &BootstrapRequest,
    config: &GlobalConfig,
    delegate: &dyn BuildDelegate,
) -> miette::Result<()> {
    let dependencies =
        resolver::resolve(&request.modules, &request.version, &request.dependencies)?;
    status(
        "Resolved",
        &format!("{} dependencies for ADAMS {}", dependencies.len(), request.version.trim()),
    );

    let client = download::build_client()?;
    let sp = spinner("Obtaining Maven user settings...");
    let settings = settings::ensure_settings(
        &client,
        request.maven_user_settings.as_deref(),
        &settings::cached_settings_path(),
        &config.maven.settings_url,
    )
    .await;
    sp.finish_and_clear();
    let settings = settings?;
    status_info("Settings", &settings.display().to_string());

    let pom_template = load_pom_template(request.pom_template.as_deref())?;

    let plan = BuildPlan {
        name: request.name.clone(),
        dependencies,
        dependency_files: request.dependency_files.clone(),
        output_dir: request.output_dir.clone(),
        pom_template,
        settings,
        maven_home: request.maven_home.clone(),
        java_home: request.java_home.clone(),
        clean: request.clean,
        sources: request.sources,
        jvm: request.jvm.clone(),
        main_class: request.script_main_class().map(String::from),
        external_jars: request.external_jars.clone(),
        external_sources: request.external_sources.clone(),
    };

    delegate.execute(&plan)
}
