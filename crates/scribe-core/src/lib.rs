//! Scribe Core - shared foundation for changelog generation
//!
//! This crate provides the error taxonomy and configuration system used by
//! the classifier, the git collaborator and the command-line front end.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, GitConfig};
pub use error::{ConfigError, GitError, Result, ScribeError, TemplateError};
