//! Maven-facing resources: the HTTP client, the Maven user settings file,
//! and the module catalogs (parent POMs listing the available modules).

pub mod catalog;
pub mod download;
pub mod settings;
