//! Configuration module for the screenshot sorter.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Run mode definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, LookupConfig, PathsConfig};
pub use modes::RunMode;
pub use validation::validate_config;
