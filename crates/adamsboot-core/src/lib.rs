//! Core data types for adamsboot.
//!
//! Maven coordinates, the module resolver that turns a comma-separated
//! module list into an ordered dependency set, dependency declaration
//! files, the global configuration, the per-invocation bootstrap request,
//! and the `{{variable}}` template engine used for generated files.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod coordinate;
pub mod dependency_file;
pub mod modules;
pub mod request;
pub mod resolver;
pub mod template;
