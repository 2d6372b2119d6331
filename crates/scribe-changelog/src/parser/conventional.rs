//! Conventional commit header parser
//!
//! Splits `type(scope): subject` headers. Only the first line of a message is
//! considered. The header is split at the first `:`; the scope is the text
//! between the first `(` and the next `)` in the part before the colon.

use super::CommitParser;
use crate::types::ParsedHeader;

/// Parser for `type(scope): subject` headers
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Split a header line into type, scope and subject
    fn parse_header(header: &str) -> Option<ParsedHeader> {
        let colon = header.find(':')?;
        let name_commit_type = &header[..colon];
        let subject = header[colon + 1..].trim();

        let (commit_type, scope) = match name_commit_type.find('(') {
            Some(open) => {
                let rest = &name_commit_type[open + 1..];
                let scope = rest.find(')').map_or("", |close| &rest[..close]);
                (&name_commit_type[..open], scope)
            }
            None => (name_commit_type, ""),
        };

        Some(ParsedHeader {
            commit_type: commit_type.to_string(),
            scope: scope.to_string(),
            subject: subject.to_string(),
        })
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, message: &str) -> Option<ParsedHeader> {
        let header = message.split('\n').next().unwrap_or(message);
        Self::parse_header(header)
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
