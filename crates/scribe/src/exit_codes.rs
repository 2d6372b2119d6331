//! Exit codes for the CLI

use scribe_core::{ConfigError, GitError, ScribeError, TemplateError};

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// Template error
pub const TEMPLATE_ERROR: u8 = 4;

/// Pick the exit code for an error chain
pub fn for_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(scribe) = cause.downcast_ref::<ScribeError>() {
            return match scribe {
                ScribeError::Config(_) => CONFIG_ERROR,
                ScribeError::Git(_) => GIT_ERROR,
                ScribeError::Template(_) => TEMPLATE_ERROR,
            };
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<TemplateError>() {
            return TEMPLATE_ERROR;
        }
    }
    ERROR
}
