//! Command dispatch and handler modules.

mod bootstrap;
mod list_modules;

use miette::Result;

use adamsboot_core::config::GlobalConfig;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the appropriate handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;

    if cli.list_modules {
        return list_modules::exec(&config);
    }
    bootstrap::exec(cli, &config)
}

/// Runtime for the network parts of a command.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(|e| {
        adamsboot_util::errors::BootstrapError::Generic {
            message: format!("Failed to start async runtime: {e}"),
        }
        .into()
    })
}
