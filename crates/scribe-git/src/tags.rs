//! Tag operations

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tags, peeled to the commit they point at
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{name}"))?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagInfo::new(name, commit.id().to_string())),
                Err(e) => debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Release tags (names that parse as versions), newest version first
    #[instrument(skip(self))]
    pub fn release_tags(&self) -> Result<Vec<TagInfo>> {
        let mut releases: Vec<TagInfo> = self
            .tags()?
            .into_iter()
            .filter(TagInfo::is_release)
            .collect();

        releases.sort_by(|a, b| b.version.cmp(&a.version).then_with(|| b.name.cmp(&a.name)));

        for tag in releases.iter().take(10) {
            debug!(tag = %tag.name, "release tag");
        }
        debug!(count = releases.len(), "listed release tags");
        Ok(releases)
    }
}
