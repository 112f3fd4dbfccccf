//! Module catalogs: the parent POMs of the ADAMS repositories, whose
//! `<module>` entries are the modules a user can request.

use std::fmt;

use futures_util::future::join_all;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use adamsboot_core::config::CatalogEntry;
use adamsboot_util::errors::BootstrapError;

use crate::download::{self, HttpText};

/// The modules offered by one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListing {
    pub name: String,
    pub url: String,
    pub modules: Vec<String>,
}

/// Result of querying one catalog.
#[derive(Debug, Clone)]
pub enum CatalogOutcome {
    Listed(CatalogListing),
    /// The catalog could not be reached; it is left out of the listing.
    Unreachable { name: String, reason: String },
}

/// Extract the `<module>` names from a POM, in sorted order.
///
/// Modules nested in profiles count as well. Names containing a `$`
/// (property references) are skipped and duplicates are collapsed.
pub fn extract_modules(pom: &str) -> Result<Vec<String>, BootstrapError> {
    let mut reader = Reader::from_str(pom);
    reader.config_mut().trim_text(true);

    let mut modules = Vec::new();
    let mut in_module = false;
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                in_module = e.local_name().as_ref() == b"module";
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) if in_module => {
                text_buf.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::End(_)) => {
                if in_module {
                    let name = text_buf.trim();
                    if !name.is_empty() && !name.contains('$') {
                        modules.push(name.to_string());
                    }
                }
                in_module = false;
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BootstrapError::Generic {
                    message: format!("Failed to parse POM XML: {e}"),
                });
            }
            _ => {}
        }
    }

    modules.sort();
    modules.dedup();
    Ok(modules)
}

/// Fetch one catalog and extract its modules.
///
/// An HTTP error status or a POM without modules is an error; a transport
/// failure only makes the catalog [`CatalogOutcome::Unreachable`].
pub async fn fetch_catalog(
    client: &Client,
    entry: &CatalogEntry,
) -> miette::Result<CatalogOutcome> {
    let body = match download::fetch_text(client, &entry.url).await {
        Ok(HttpText::Body(body)) => body,
        Ok(HttpText::Status(status)) => {
            return Err(BootstrapError::Network {
                message: format!(
                    "Failed to load URL (status: {}): {}",
                    download::describe_status(status),
                    entry.url
                ),
            }
            .into());
        }
        Err(e) => {
            tracing::error!("Failed to extract modules from: {} ({e})", entry.url);
            return Ok(CatalogOutcome::Unreachable {
                name: entry.name.clone(),
                reason: e.to_string(),
            });
        }
    };

    let no_modules = |detail: String| BootstrapError::Generic {
        message: format!("Failed to extract any modules from: {}{detail}", entry.url),
    };
    let modules = extract_modules(&body).map_err(|e| no_modules(format!(" ({e})")))?;
    if modules.is_empty() {
        return Err(no_modules(String::new()).into());
    }

    Ok(CatalogOutcome::Listed(CatalogListing {
        name: entry.name.clone(),
        url: entry.url.clone(),
        modules,
    }))
}

/// Fetch all catalogs concurrently. Results keep the order of `entries`.
pub async fn fetch_catalogs(
    client: &Client,
    entries: &[CatalogEntry],
) -> Vec<miette::Result<CatalogOutcome>> {
    join_all(entries.iter().map(|entry| fetch_catalog(client, entry))).await
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        write!(f, "{}", self.modules.join(", "))
    }
}
