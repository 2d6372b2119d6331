//! Error types for Scribe

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ScribeError
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Main error type for Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Template-related errors
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// No release tags found
    #[error("No release tags found in repository")]
    NoTags,

    /// Requested current tag does not exist
    #[error("No release tag contains '{0}'")]
    TagNotFound(String),

    /// Tag pattern failed to compile
    #[error("Invalid tag pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Template-related errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file not found
    #[error("Template file not found at {0}")]
    FileNotFound(PathBuf),

    /// A paired marker is missing or unclosed
    #[error("Template is missing the <{0}>...</{0}> marker")]
    MissingMarker(&'static str),

    /// Markers appear out of order
    #[error("Template markers must appear in order: <section>, <scope>, <commits>")]
    MarkerOrder,

    /// IO error
    #[error("IO error reading template: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_display() {
        let err: ScribeError = TemplateError::MissingMarker("scope").into();
        assert_eq!(
            err.to_string(),
            "Template is missing the <scope>...</scope> marker"
        );

        let err: ScribeError = GitError::TagNotFound("v9".to_string()).into();
        assert_eq!(err.to_string(), "No release tag contains 'v9'");
    }

    #[test]
    fn test_config_error_display() {
        let err: ScribeError = ConfigError::InvalidValue {
            field: "git.remote".to_string(),
            message: "remote cannot be empty".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: git.remote - remote cannot be empty"
        );
    }
}
