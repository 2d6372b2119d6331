//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for Scribe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog classification and rendering
    pub changelog: ChangelogConfig,

    /// Release range resolution
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Type mapping, e.g. `feat:Features,fix:Bug Fixes`
    pub types: String,

    /// Scope mapping in the same `key:name` form
    pub scopes: Option<String>,

    /// Custom template path (bundled template when unset)
    pub template: Option<PathBuf>,

    /// strftime format for the `{{date}}` placeholder
    pub date_format: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            types: "feat:Features,fix:Bug Fixes".to_string(),
            scopes: None,
            template: None,
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

impl ChangelogConfig {
    /// Resolve the template path against a base directory
    pub fn template_path(&self, base: &Path) -> Option<PathBuf> {
        self.template.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        })
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to derive commit permalinks
    pub remote: String,

    /// Pattern the previous release tag must match
    pub tag_regex: Option<String>,

    /// Substring selecting the current release tag (newest when unset)
    pub current_tag: Option<String>,

    /// Base URL for permalinks, e.g. `https://github.com/owner/repo`
    pub link_base: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            tag_regex: None,
            current_tag: None,
            link_base: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.types, "feat:Features,fix:Bug Fixes");
        assert!(config.changelog.scopes.is_none());
        assert_eq!(config.git.remote, "origin");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[git]\ntag_regex = \"^v\\\\d\"\n").unwrap();
        assert_eq!(config.git.tag_regex.as_deref(), Some("^v\\d"));
        assert_eq!(config.git.remote, "origin");
        assert_eq!(config.changelog.date_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_template_path_resolution() {
        let mut config = ChangelogConfig::default();
        assert!(config.template_path(Path::new("/repo")).is_none());

        config.template = Some(PathBuf::from(".github/CHANGELOG.tpl.md"));
        assert_eq!(
            config.template_path(Path::new("/repo")).unwrap(),
            PathBuf::from("/repo/.github/CHANGELOG.tpl.md")
        );

        config.template = Some(PathBuf::from("/abs/tpl.md"));
        assert_eq!(
            config.template_path(Path::new("/repo")).unwrap(),
            PathBuf::from("/abs/tpl.md")
        );
    }
}
