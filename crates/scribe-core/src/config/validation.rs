//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.types.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.types".to_string(),
            message: "at least one type mapping is required".to_string(),
        }
        .into());
    }

    if config.changelog.date_format.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.date_format".to_string(),
            message: "date format cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.remote".to_string(),
            message: "remote cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(pattern) = &config.git.tag_regex {
        if let Err(e) = Regex::new(pattern) {
            return Err(ConfigError::InvalidValue {
                field: "git.tag_regex".to_string(),
                message: e.to_string(),
            }
            .into());
        }
    }

    Ok(())
}
