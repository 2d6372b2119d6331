//! Remote operations and commit permalinks

use scribe_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Browsable base URL of a remote, if it looks like a hosted repository
    pub fn remote_web_url(&self, name: &str) -> Option<String> {
        self.remote_url(name).ok().flatten().as_deref().and_then(web_url)
    }
}

/// Turn a clone URL into a browsable `https://host/owner/repo` URL.
///
/// Handles `https://`, `ssh://` and scp-like `git@host:owner/repo` forms;
/// local paths yield `None`.
pub fn web_url(remote_url: &str) -> Option<String> {
    let url = remote_url.trim();
    let url = url.strip_suffix('/').unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);

    let (host, path) = if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("ssh://"))
        .or_else(|| url.strip_prefix("git://"))
    {
        let (authority, path) = rest.split_once('/')?;
        let host = authority.rsplit('@').next()?;
        let host = if url.starts_with("ssh://") {
            host.split(':').next()?
        } else {
            host
        };
        (host, path)
    } else if let Some((user_host, path)) = url.split_once(':') {
        if user_host.len() < 2 || user_host.contains('/') || path.starts_with('/') {
            return None;
        }
        (user_host.rsplit('@').next()?, path)
    } else {
        return None;
    };

    if host.is_empty() || path.is_empty() {
        return None;
    }
    Some(format!("https://{host}/{path}"))
}

/// Permalink for a commit, or `#` without a base URL
pub fn commit_permalink(base: Option<&str>, hash: &str) -> String {
    match base {
        Some(base) => format!("{}/commit/{hash}", base.trim_end_matches('/')),
        None => "#".to_string(),
    }
}
