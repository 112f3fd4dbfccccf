//! Handler for the default action: bootstrap an application.

use miette::{Result, WrapErr};

use adamsboot_core::config::GlobalConfig;
use adamsboot_core::request::BootstrapRequest;
use adamsboot_ops::delegate::MavenDelegate;

use crate::cli::Cli;

fn to_request(cli: Cli) -> BootstrapRequest {
    BootstrapRequest {
        modules: cli.modules.unwrap_or_default(),
        version: cli.version.unwrap_or_default(),
        output_dir: cli.output_dir.unwrap_or_default(),
        name: cli.name,
        maven_home: cli.maven_home,
        maven_user_settings: cli.maven_user_settings,
        java_home: cli.java_home,
        pom_template: cli.pom_template,
        clean: cli.clean,
        jvm: cli.jvm,
        dependencies: cli.dependencies,
        dependency_files: cli.dependency_files,
        external_jars: cli.external_jars,
        sources: cli.sources,
        external_sources: cli.external_sources,
        main_class: Some(cli.main_class),
    }
}

pub fn exec(cli: Cli, config: &GlobalConfig) -> Result<()> {
    let request = to_request(cli).with_config_defaults(config);
    tracing::debug!(?request, "bootstrap request");

    let rt = super::runtime()?;
    rt.block_on(adamsboot_ops::ops_bootstrap::bootstrap(
        &request,
        config,
        &MavenDelegate,
    ))
    .wrap_err("Failed to perform bootstrapping")
}
