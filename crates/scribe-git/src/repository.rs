//! Repository handle

use std::path::{Path, PathBuf};

use git2::{Commit, Repository};
use tracing::{info, instrument};

use scribe_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Read-only view of the repository a release is cut from
pub struct GitRepo {
    pub(crate) repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Find the repository containing `start`, walking up parent directories
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::NotARepository(start.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;

        // Bare repositories have no working tree; fall back to the git dir.
        let workdir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        info!(workdir = %workdir.display(), "using git repository");

        Ok(Self { repo, workdir })
    }

    /// Top-level directory of the repository
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Peel a revision (tag name, sha, `HEAD`) to the commit it names
    pub(crate) fn peel_commit(&self, rev: &str) -> Result<Commit<'_>> {
        Ok(self.repo.revparse_single(rev)?.peel_to_commit()?)
    }
}
