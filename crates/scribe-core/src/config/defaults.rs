//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "scribe.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "scribe.yaml";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".scribe.toml",
        ".scribe.yaml",
    ]
}
