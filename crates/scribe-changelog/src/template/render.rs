//! Template rendering

use std::fmt::Write;

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use super::{
    inner_content, Template, COMMITS_TAG, COMMIT_LINK, COMMIT_MESSAGE, DATE, SCOPE_TAG,
    SCOPE_TITLE, SECTION_TAG, SECTION_TITLE, VERSION_NAME,
};
use crate::types::ClassifiedResult;

/// Short US-style date, e.g. `3/7/2025`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Renders classified commits into a template
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: Template,
    date_format: String,
}

impl TemplateRenderer {
    /// Create a renderer using the default date format
    pub fn new(template: Template) -> Self {
        Self {
            template,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Set the strftime format used for `{{date}}`
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Render the changelog.
    ///
    /// Every placeholder substitution replaces the first occurrence only.
    #[instrument(
        skip(self, classified),
        fields(version = version_name, bucket_count = classified.buckets.len())
    )]
    pub fn render(
        &self,
        version_name: &str,
        today: NaiveDate,
        classified: &ClassifiedResult,
    ) -> String {
        let content = self
            .template
            .source()
            .replacen(DATE, &self.format_date(today), 1)
            .replacen(VERSION_NAME, version_name, 1);

        let section = inner_content(&content, SECTION_TAG).unwrap_or_default();
        let scope = inner_content(&content, SCOPE_TAG).unwrap_or_default();
        let commit = inner_content(&content, COMMITS_TAG).unwrap_or_default();

        let mut body = String::new();
        for bucket in &classified.buckets {
            body.push_str(&section.replacen(SECTION_TITLE, &bucket.title, 1));
            body.push('\n');
            for group in &bucket.scopes {
                if !group.is_unscoped() {
                    body.push_str(&scope.replacen(SCOPE_TITLE, &group.title, 1));
                    body.push('\n');
                }
                for entry in &group.entries {
                    body.push_str(
                        &commit
                            .replacen(COMMIT_MESSAGE, &entry.message, 1)
                            .replacen(COMMIT_LINK, &entry.link, 1),
                    );
                    body.push('\n');
                }
            }
            body.push('\n');
        }

        let output = splice(&content, body.trim_end());
        debug!(output_len = output.len(), "changelog rendered");
        output
    }

    fn format_date(&self, today: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", today.format(&self.date_format)).is_err() {
            warn!(format = %self.date_format, "invalid date format, using default");
            return today.format(DEFAULT_DATE_FORMAT).to_string();
        }
        out
    }
}

/// Replace the span from the first `<section>` through the last `</commits>`
fn splice(content: &str, replacement: &str) -> String {
    let open = format!("<{SECTION_TAG}>");
    let close = format!("</{COMMITS_TAG}>");

    match (content.find(&open), content.rfind(&close)) {
        (Some(start), Some(close_at)) if start <= close_at => {
            let end = close_at + close.len();
            let mut out = String::with_capacity(content.len() + replacement.len());
            out.push_str(&content[..start]);
            out.push_str(replacement);
            out.push_str(&content[end..]);
            out
        }
        _ => content.to_string(),
    }
}
