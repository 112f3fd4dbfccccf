use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all adamsboot operations.
#[derive(Debug, Error, Diagnostic)]
pub enum BootstrapError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested modules, version or dependencies are unusable.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Run `adamsboot --list-modules` to see the available modules"))]
    Configuration { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Maven user settings could not be obtained or are malformed.
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// The external build (Maven) failed.
    #[error("Build failed: {message}")]
    Build { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl BootstrapError {
    /// Shorthand for a [`BootstrapError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type BootstrapResult<T> = miette::Result<T>;
