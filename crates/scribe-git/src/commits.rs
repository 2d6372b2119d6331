//! Commit history operations

use git2::{Oid, Sort};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits reachable from `to` but not from `from`, oldest first
    #[instrument(skip(self))]
    pub fn commits_between(&self, from: &str, to: &str) -> Result<Vec<CommitInfo>> {
        let from = self.peel_commit(from)?.id();
        let to = self.peel_commit(to)?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(to)?;
        revwalk.hide(from)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "collected commit range");
        Ok(commits)
    }

    /// The oldest commit on the first-parent chain of `rev`
    pub fn root_commit(&self, rev: &str) -> Result<Oid> {
        let mut commit = self.peel_commit(rev)?;
        while let Ok(parent) = commit.parent(0) {
            commit = parent;
        }
        Ok(commit.id())
    }
}

fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    CommitInfo {
        hash: commit.id().to_string(),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    /// Create a repository with one commit per message, returning their ids
    pub(crate) fn repo_with_commits(messages: &[&str]) -> (TempDir, Repository, Vec<Oid>) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let mut oids = Vec::new();
        {
            let sig = Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            for message in messages {
                let parents: Vec<_> = oids
                    .last()
                    .map(|oid| repo.find_commit(*oid).unwrap())
                    .into_iter()
                    .collect();
                let parent_refs: Vec<_> = parents.iter().collect();
                let oid = repo
                    .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
                    .unwrap();
                oids.push(oid);
            }
        }
        (temp, repo, oids)
    }

    #[test]
    fn test_commits_between_oldest_first() {
        let (temp, _repo, oids) =
            repo_with_commits(&["init", "feat: one", "fix: two\n\nbody", "feat: three"]);
        let repo = GitRepo::discover(temp.path()).unwrap();

        let commits = repo
            .commits_between(&oids[0].to_string(), &oids[3].to_string())
            .unwrap();

        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, ["feat: one", "fix: two\n\nbody", "feat: three"]);
        assert_eq!(commits[0].hash, oids[1].to_string());
    }

    #[test]
    fn test_root_commit() {
        let (temp, _repo, oids) = repo_with_commits(&["init", "a", "b"]);
        let repo = GitRepo::discover(temp.path()).unwrap();
        assert_eq!(repo.root_commit("HEAD").unwrap(), oids[0]);
    }
}
