//! Scribe Git - release range resolution
//!
//! Finds the commits that belong to a release: the current release tag, the
//! release before it, and every commit in between, oldest first.

mod commits;
mod range;
mod remote;
mod repository;
mod tags;
pub mod types;

pub use range::ReleaseRange;
pub use remote::{commit_permalink, web_url};
pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
