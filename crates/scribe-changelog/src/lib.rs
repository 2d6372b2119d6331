//! Scribe Changelog - commit classification and template rendering
//!
//! Commit headers of the form `type(scope): subject` are grouped under
//! configured section and scope titles, then spliced into a template whose
//! `<section>`, `<scope>` and `<commits>` markers are repeated per item.

pub mod classifier;
pub mod generator;
pub mod mapping;
pub mod parser;
pub mod template;
pub mod types;

pub use classifier::Classifier;
pub use generator::ChangelogGenerator;
pub use mapping::{Mapping, MappingEntry};
pub use parser::{CommitParser, ConventionalParser};
pub use template::{Template, TemplateRenderer};
pub use types::{ClassifiedResult, Entry, ParsedHeader, RawCommit, ScopeGroup, TypeBucket};
