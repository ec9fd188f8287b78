//! Configuration validation logic.

use std::path::Path;

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_source_directory(config.paths.source_directory.as_deref())?;
    validate_cache_file(config.cache_file())?;
    validate_endpoint(&config.lookup.endpoint)?;
    validate_timeout(config.lookup.timeout_seconds)?;

    Ok(())
}

/// Validate the screenshot folder.
pub fn validate_source_directory(dir: Option<&Path>) -> Result<()> {
    let dir = dir.ok_or_else(|| {
        Error::MissingConfig("source_directory (folder holding your screenshots)".to_string())
    })?;

    if !dir.is_dir() {
        return Err(Error::ConfigValidation {
            field: "source_directory".to_string(),
            message: format!("'{}' is not an existing directory", dir.display()),
        });
    }

    Ok(())
}

/// Validate the cache file path.
pub fn validate_cache_file(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingConfig("cache_file".to_string()));
    }

    if path.is_dir() {
        return Err(Error::ConfigValidation {
            field: "cache_file".to_string(),
            message: format!("'{}' is a directory", path.display()),
        });
    }

    Ok(())
}

/// Validate the lookup endpoint.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(Error::MissingConfig("endpoint".to_string()));
    }

    let url = Url::parse(endpoint)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "endpoint".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the request timeout.
pub fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}
