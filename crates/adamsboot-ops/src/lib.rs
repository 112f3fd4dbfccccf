//! Operations behind the `adamsboot` command line.

pub mod delegate;
pub mod ops_bootstrap;
pub mod ops_modules;
