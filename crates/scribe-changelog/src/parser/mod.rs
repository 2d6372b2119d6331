//! Commit header parsing

mod conventional;

pub use conventional::{capitalize_first, ConventionalParser};

use crate::types::ParsedHeader;

/// Trait for commit header parsers
pub trait CommitParser: Send + Sync {
    /// Parse a full commit message, returning `None` when it does not follow
    /// the parser's convention
    fn parse(&self, message: &str) -> Option<ParsedHeader>;
}
