//! Changelog templates
//!
//! A template is plain text with two scalar placeholders, `{{date}}` and
//! `{{versionName}}`, and three paired markers in document order:
//!
//! ```text
//! <section>## {{sectionTitle}}</section>
//! <scope>### {{scopeTitle}}</scope>
//! <commits>- {{commitMessage}} ({{commitLink}})</commits>
//! ```
//!
//! The text inside each marker is repeated once per section, scope and
//! commit. The whole span from `<section>` to `</commits>` is replaced by the
//! repeated output.

mod render;

pub use render::{TemplateRenderer, DEFAULT_DATE_FORMAT};

use std::path::Path;

use scribe_core::error::TemplateError;
use tracing::{debug, info};

/// Section marker tag
pub const SECTION_TAG: &str = "section";
/// Scope marker tag
pub const SCOPE_TAG: &str = "scope";
/// Commit marker tag
pub const COMMITS_TAG: &str = "commits";

/// Release date placeholder
pub const DATE: &str = "{{date}}";
/// Version name placeholder
pub const VERSION_NAME: &str = "{{versionName}}";
/// Section title placeholder (inside `<section>`)
pub const SECTION_TITLE: &str = "{{sectionTitle}}";
/// Scope title placeholder (inside `<scope>`)
pub const SCOPE_TITLE: &str = "{{scopeTitle}}";
/// Commit message placeholder (inside `<commits>`)
pub const COMMIT_MESSAGE: &str = "{{commitMessage}}";
/// Commit link placeholder (inside `<commits>`)
pub const COMMIT_LINK: &str = "{{commitLink}}";

/// Template bundled with the crate
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/CHANGELOG.tpl.md");

/// A validated changelog template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Validate template text
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();

        let mut previous_end = 0;
        for tag in [SECTION_TAG, SCOPE_TAG, COMMITS_TAG] {
            let (start, end) =
                marker_span(&source, tag).ok_or(TemplateError::MissingMarker(tag))?;
            if start < previous_end {
                return Err(TemplateError::MarkerOrder);
            }
            previous_end = end;
        }

        Ok(Self { source })
    }

    /// The template bundled with the crate
    pub fn bundled() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Read and validate a template file
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        info!(path = %path.display(), "loading template");
        let source = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::FileNotFound(path.to_path_buf())
            } else {
                TemplateError::Io(e)
            }
        })?;
        let template = Self::parse(source)?;
        debug!(path = %path.display(), len = template.source.len(), "template loaded");
        Ok(template)
    }

    /// Load a custom template, or fall back to the bundled one
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, TemplateError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("using bundled template");
                Ok(Self::bundled())
            }
        }
    }

    /// Raw template text
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Text between `<tag>` and the first `</tag>` after it
pub(crate) fn inner_content<'a>(content: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = content.find(&open)? + open.len();
    let len = content[start..].find(&close)?;
    Some(&content[start..start + len])
}

/// Byte span of a whole `<tag>...</tag>` pair
fn marker_span(content: &str, tag: &str) -> Option<(usize, usize)> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = content.find(&open)?;
    let close_at = content[start + open.len()..].find(&close)? + start + open.len();
    Some((start, close_at + close.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_template_is_valid() {
        assert!(Template::parse(DEFAULT_TEMPLATE).is_ok());
        assert_eq!(Template::bundled().source(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_inner_content() {
        let text = "a <scope>### {{scopeTitle}}</scope> b";
        assert_eq!(inner_content(text, SCOPE_TAG), Some("### {{scopeTitle}}"));
        assert_eq!(inner_content(text, SECTION_TAG), None);
        assert_eq!(inner_content("<scope>open", SCOPE_TAG), None);
    }

    #[test]
    fn test_inner_content_spans_lines() {
        let text = "<commits>\n- {{commitMessage}}\n</commits>";
        assert_eq!(
            inner_content(text, COMMITS_TAG),
            Some("\n- {{commitMessage}}\n")
        );
    }

    #[test]
    fn test_missing_marker() {
        let err = Template::parse("<section>x</section><commits>y</commits>").unwrap_err();
        assert!(matches!(err, TemplateError::MissingMarker("scope")));

        let err = Template::parse("<section>x</section><scope>y<commits>z</commits>").unwrap_err();
        assert!(matches!(err, TemplateError::MissingMarker("scope")));
    }

    #[test]
    fn test_marker_order() {
        let err = Template::parse("<scope>y</scope><section>x</section><commits>z</commits>")
            .unwrap_err();
        assert!(matches!(err, TemplateError::MarkerOrder));
    }

    #[test]
    fn test_nested_markers_rejected() {
        let err = Template::parse(
            "<section>x<scope>y<commits>z</commits></scope></section>",
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::MarkerOrder));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.tpl.md");
        std::fs::write(&path, DEFAULT_TEMPLATE).unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.source(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.md");
        let err = Template::load(&path).unwrap_err();
        assert!(matches!(err, TemplateError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_load_or_bundled() {
        assert_eq!(Template::load_or_bundled(None).unwrap(), Template::bundled());
    }
}
