//! Operation: list the modules offered by the configured catalogs.

use std::io::Write;

use adamsboot_core::config::GlobalConfig;
use adamsboot_maven::catalog::{self, CatalogOutcome};
use adamsboot_maven::download;
use adamsboot_util::errors::BootstrapError;
use adamsboot_util::progress::{spinner, status_warn};

/// Printed after the listing.
pub const LTS_NOTE: &str =
    "LTS and non-LTS modules (e.g., 'adams-weka-lts' and 'adams-weka') cannot be mixed.";

/// Write the listing in catalog order.
///
/// Stops at the first failed catalog; unreachable catalogs are skipped with
/// a warning.
pub fn write_listing(
    out: &mut impl Write,
    outcomes: Vec<miette::Result<CatalogOutcome>>,
) -> miette::Result<()> {
    writeln!(out, "\nAvailable modules:").map_err(BootstrapError::Io)?;

    for outcome in outcomes {
        match outcome? {
            CatalogOutcome::Listed(listing) => {
                writeln!(out, "\n{listing}").map_err(BootstrapError::Io)?;
            }
            CatalogOutcome::Unreachable { name, reason } => {
                status_warn("Skipped", &format!("{name}: {reason}"));
            }
        }
    }

    writeln!(out, "\nNote:\n{LTS_NOTE}").map_err(BootstrapError::Io)?;
    Ok(())
}

/// Fetch every catalog and print the available modules to stdout.
pub async fn list_modules(config: &GlobalConfig) -> miette::Result<()> {
    let client = download::build_client()?;

    let sp = spinner(&format!(
        "Fetching {} module catalogs...",
        config.catalogs.len()
    ));
    let outcomes = catalog::fetch_catalogs(&client, &config.catalogs).await;
    sp.finish_and_clear();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, outcomes)
}
