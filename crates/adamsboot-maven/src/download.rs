//! Plain HTTP GETs for static resources (settings.xml, catalog POMs).
//!
//! A single attempt per request; redirects are followed.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use adamsboot_util::errors::BootstrapError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// What a GET produced when the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpText {
    /// 2xx response body.
    Body(String),
    /// Any non-success status.
    Status(StatusCode),
}

/// Build the shared reqwest client.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("adamsboot/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            BootstrapError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// GET `url` as text.
///
/// Transport failures (DNS, connect, timeout, body read) are returned as
/// [`BootstrapError::Network`]; HTTP error statuses come back as
/// [`HttpText::Status`] so callers can decide how fatal they are.
pub async fn fetch_text(client: &Client, url: &str) -> Result<HttpText, BootstrapError> {
    tracing::info!("GET {url}");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| BootstrapError::Network {
            message: format!("Request to {url} failed: {e}"),
        })?;

    let status = resp.status();
    if !status.is_success() {
        tracing::debug!("{url} answered {status}");
        return Ok(HttpText::Status(status));
    }

    let text = resp.text().await.map_err(|e| BootstrapError::Network {
        message: format!("Failed to read response from {url}: {e}"),
    })?;
    Ok(HttpText::Body(text))
}

/// `"404: Not Found"` style rendering of a status.
pub fn describe_status(status: StatusCode) -> String {
    format!(
        "{}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_description() {
        assert_eq!(describe_status(StatusCode::NOT_FOUND), "404: Not Found");
        assert_eq!(
            describe_status(StatusCode::from_u16(599).unwrap()),
            "599: Unknown"
        );
    }

    #[test]
    fn client_builds() {
        assert!(build_client().is_ok());
    }
}
