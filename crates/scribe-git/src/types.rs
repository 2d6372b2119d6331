//! Git types

use semver::Version;

/// A commit inside a release range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Full commit message, header line first
    pub message: String,
}

/// Information about a release tag
#[derive(Debug, Clone)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Commit hash the tag points to
    pub commit_hash: String,
    /// Version parsed from the tag name
    pub version: Option<Version>,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        let name = name.into();
        let version = parse_version(&name);

        Self {
            name,
            commit_hash: commit_hash.into(),
            version,
        }
    }

    /// Whether the tag name is a release version
    pub fn is_release(&self) -> bool {
        self.version.is_some()
    }
}

/// Parse a tag name such as `v1.2.3`, `1.2` or `v2` into a version.
///
/// Missing minor/patch components default to zero.
pub fn parse_version(tag: &str) -> Option<Version> {
    let tag = tag.strip_prefix('v').unwrap_or(tag);

    if let Ok(version) = Version::parse(tag) {
        return Some(version);
    }

    let parts: Vec<&str> = tag.split('.').collect();
    let numeric = |p: &&str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if parts.len() > 2 || !parts.iter().all(numeric) {
        return None;
    }

    let number = |i: usize| parts.get(i).map_or(Some(0), |p| p.parse::<u64>().ok());
    Some(Version::new(number(0)?, number(1)?, 0))
}
