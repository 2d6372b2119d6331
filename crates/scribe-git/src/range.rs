//! Release range resolution

use regex::Regex;
use tracing::{info, instrument};

use scribe_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

/// Commits belonging to one release: everything after `from` up to `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRange {
    /// Name of the current release tag
    pub version_name: String,
    /// Exclusive start: the previous release, or the root commit
    pub from: String,
    /// Inclusive end: the current release commit
    pub to: String,
}

impl GitRepo {
    /// Resolve the commit range of the current release.
    ///
    /// The current release is the newest release tag, or the first one whose
    /// name contains `current_tag`. The previous release is the next older
    /// tag, restricted to names matching `tag_regex` when given. Without a
    /// previous release the range starts after the root commit.
    #[instrument(skip(self))]
    pub fn resolve_range(
        &self,
        current_tag: Option<&str>,
        tag_regex: Option<&str>,
    ) -> Result<ReleaseRange> {
        let releases = self.release_tags()?;
        if releases.is_empty() {
            return Err(GitError::NoTags);
        }

        let current_index = match current_tag.filter(|t| !t.is_empty()) {
            Some(wanted) => releases
                .iter()
                .position(|r| r.name.contains(wanted))
                .ok_or_else(|| GitError::TagNotFound(wanted.to_string()))?,
            None => 0,
        };
        let current = &releases[current_index];
        info!(
            index = current_index,
            tag = %current.name,
            sha = %current.commit_hash,
            "current release"
        );

        let pattern = tag_regex
            .filter(|p| !p.is_empty())
            .map(|p| {
                Regex::new(p).map_err(|e| GitError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let previous = releases
            .iter()
            .skip(current_index + 1)
            .find(|r| pattern.as_ref().map_or(true, |re| re.is_match(&r.name)));

        let from = match previous {
            Some(tag) => {
                info!(tag = %tag.name, sha = %tag.commit_hash, "previous release");
                tag.commit_hash.clone()
            }
            None => {
                let root = self.root_commit(&current.commit_hash)?.to_string();
                info!(sha = %root, "no previous release, starting from root commit");
                root
            }
        };

        Ok(ReleaseRange {
            version_name: current.name.clone(),
            from,
            to: current.commit_hash.clone(),
        })
    }

    /// Commits of a resolved range, oldest first
    pub fn release_commits(&self, range: &ReleaseRange) -> Result<Vec<CommitInfo>> {
        let commits = self.commits_between(&range.from, &range.to)?;
        info!(
            count = commits.len(),
            from = %range.from,
            to = %range.to,
            "fetched release commits"
        );
        Ok(commits)
    }
}
