//! Changelog types

use serde::{Deserialize, Serialize};

/// Link used when a commit has no permalink
pub const DEFAULT_LINK: &str = "#";

/// A commit as handed over by the repository collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CompareCommit")]
pub struct RawCommit {
    /// Full commit message, header line first
    pub message: String,
    /// Permalink to the commit
    pub link: String,
}

impl RawCommit {
    /// Create a commit without a permalink
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            link: DEFAULT_LINK.to_string(),
        }
    }

    /// Set the permalink
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

/// Shape of one commit in a hosting provider's compare response:
/// `{ "commit": { "message": "..." }, "html_url": "..." }`
#[derive(Deserialize)]
struct CompareCommit {
    commit: CompareCommitDetail,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct CompareCommitDetail {
    message: String,
}

impl From<CompareCommit> for RawCommit {
    fn from(value: CompareCommit) -> Self {
        Self {
            message: value.commit.message,
            link: value
                .html_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_LINK.to_string()),
        }
    }
}

/// Parse a JSON array of compare-response commits
pub fn commits_from_json(json: &str) -> serde_json::Result<Vec<RawCommit>> {
    serde_json::from_str(json)
}

/// A commit header split into its conventional parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Raw type, e.g. `feat`
    pub commit_type: String,
    /// Raw scope, empty when absent
    pub scope: String,
    /// Subject after the colon, trimmed
    pub subject: String,
}

/// A rendered commit line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Subject with its first character upper-cased
    pub message: String,
    /// Permalink to the commit
    pub link: String,
}

/// Commits of one type sharing a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeGroup {
    /// Raw scope key, empty for the unscoped group
    pub scope: String,
    /// Scope display name, empty for the unscoped group
    pub title: String,
    /// Entries in input order
    pub entries: Vec<Entry>,
}

impl ScopeGroup {
    /// Create an empty group
    pub fn new(scope: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Whether this is the unscoped group
    pub fn is_unscoped(&self) -> bool {
        self.scope.is_empty()
    }
}

/// All commits sharing a type display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBucket {
    /// Section title
    pub title: String,
    /// Scope groups, unscoped first
    pub scopes: Vec<ScopeGroup>,
}

impl TypeBucket {
    /// Create an empty bucket
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scopes: Vec::new(),
        }
    }

    /// Append an entry to the group for `scope`, creating it on first use
    pub fn push(&mut self, scope: &str, title: &str, entry: Entry) {
        match self.scopes.iter_mut().find(|g| g.scope == scope) {
            Some(group) => group.entries.push(entry),
            None => {
                let mut group = ScopeGroup::new(scope, title);
                group.entries.push(entry);
                self.scopes.push(group);
            }
        }
    }

    /// Number of entries across all scope groups
    pub fn entry_count(&self) -> usize {
        self.scopes.iter().map(|g| g.entries.len()).sum()
    }
}

/// Commits grouped by type then scope, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedResult {
    /// Non-empty buckets in type mapping order
    pub buckets: Vec<TypeBucket>,
}

impl ClassifiedResult {
    /// Check if nothing was classified
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of classified commits
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(TypeBucket::entry_count).sum()
    }

    /// Find a bucket by its section title
    pub fn bucket(&self, title: &str) -> Option<&TypeBucket> {
        self.buckets.iter().find(|b| b.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_from_json() {
        let json = r##"[
            {"commit": {"message": "feat: one"}, "html_url": "https://example.com/c/1"},
            {"commit": {"message": "fix: two"}},
            {"commit": {"message": "fix: three"}, "html_url": ""}
        ]"##;

        let commits = commits_from_json(json).unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].link, "https://example.com/c/1");
        assert_eq!(commits[1].link, "#");
        assert_eq!(commits[2].link, "#");
        assert_eq!(commits[1].message, "fix: two");
    }

    #[test]
    fn test_commits_from_json_rejects_missing_message() {
        assert!(commits_from_json(r#"[{"html_url": "x"}]"#).is_err());
    }

    #[test]
    fn test_bucket_push_groups_by_scope() {
        let mut bucket = TypeBucket::new("Features");
        let entry = |m: &str| Entry {
            message: m.to_string(),
            link: "#".to_string(),
        };
        bucket.push("api", "API", entry("A"));
        bucket.push("", "", entry("B"));
        bucket.push("api", "API", entry("C"));

        assert_eq!(bucket.scopes.len(), 2);
        assert_eq!(bucket.scopes[0].entries.len(), 2);
        assert_eq!(bucket.scopes[0].entries[1].message, "C");
        assert!(bucket.scopes[1].is_unscoped());
        assert_eq!(bucket.entry_count(), 3);
    }
}
