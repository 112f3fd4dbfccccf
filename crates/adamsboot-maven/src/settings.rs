//! Maven user settings (`settings.xml`): pick the user's file or download
//! the ADAMS one into the data directory, and make sure it is a settings file.

use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use adamsboot_util::errors::BootstrapError;

use crate::download::{self, HttpText};

/// Location of the cached settings file inside the data directory.
pub fn cached_settings_path() -> PathBuf {
    adamsboot_util::data_dir().join("settings.xml")
}

/// Check that `xml` is well-formed and rooted at `<settings>`.
pub fn validate_settings(xml: &str) -> Result<(), BootstrapError> {
    let mut reader = Reader::from_str(xml);
    let mut root: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if root.is_none() {
                    root = Some(String::from_utf8_lossy(e.local_name().as_ref()).to_string());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BootstrapError::Settings {
                    message: format!(
                        "malformed XML at position {}: {e}",
                        reader.error_position()
                    ),
                });
            }
            _ => {}
        }
    }

    match root.as_deref() {
        Some("settings") => Ok(()),
        Some(other) => Err(BootstrapError::Settings {
            message: format!("expected <settings> root element, found <{other}>"),
        }),
        None => Err(BootstrapError::Settings {
            message: "no root element".to_string(),
        }),
    }
}

fn validate_file(path: &Path) -> Result<(), BootstrapError> {
    let content = std::fs::read_to_string(path)?;
    validate_settings(&content).map_err(|e| BootstrapError::Settings {
        message: format!("{} is not a usable Maven settings file ({e})", path.display()),
    })
}

/// Resolve the settings file to hand to Maven.
///
/// An explicit file is validated and used as-is. Otherwise `cache_path` is
/// used; it is (re)downloaded from `url` when missing or unusable.
pub async fn ensure_settings(
    client: &Client,
    explicit: Option<&Path>,
    cache_path: &Path,
    url: &str,
) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        validate_file(path)?;
        tracing::debug!("using Maven user settings {}", path.display());
        return Ok(path.to_path_buf());
    }

    if cache_path.is_file() {
        match validate_file(cache_path) {
            Ok(()) => {
                tracing::debug!("using cached settings {}", cache_path.display());
                return Ok(cache_path.to_path_buf());
            }
            Err(e) => tracing::warn!("{e}; downloading a fresh copy"),
        }
    }

    let failed = |detail: String| BootstrapError::Network {
        message: format!("Failed to download Maven user settings from: {url} ({detail})"),
    };

    let body = match download::fetch_text(client, url).await {
        Ok(HttpText::Body(body)) => body,
        Ok(HttpText::Status(status)) => {
            return Err(failed(format!("HTTP {}", download::describe_status(status))).into())
        }
        Err(e) => return Err(failed(e.to_string()).into()),
    };

    validate_settings(&body).map_err(|e| BootstrapError::Settings {
        message: format!("Content downloaded from {url} is not a Maven settings file ({e})"),
    })?;

    if let Some(parent) = cache_path.parent() {
        adamsboot_util::fs::ensure_dir(parent).map_err(BootstrapError::Io)?;
    }
    std::fs::write(cache_path, body).map_err(BootstrapError::Io)?;
    tracing::info!("saved Maven user settings to {}", cache_path.display());

    Ok(cache_path.to_path_buf())
}
