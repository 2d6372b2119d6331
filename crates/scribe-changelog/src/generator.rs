//! Changelog generation

use chrono::NaiveDate;
use scribe_core::config::ChangelogConfig;
use tracing::{info, instrument};

use crate::classifier::Classifier;
use crate::mapping::Mapping;
use crate::template::{Template, TemplateRenderer};
use crate::types::{ClassifiedResult, RawCommit};

/// Classifies commits and renders them into a template
pub struct ChangelogGenerator {
    classifier: Classifier,
    renderer: TemplateRenderer,
}

impl ChangelogGenerator {
    /// Create a generator from explicit mappings and a template
    pub fn new(types: Mapping, scopes: Mapping, template: Template) -> Self {
        Self {
            classifier: Classifier::new(types, scopes),
            renderer: TemplateRenderer::new(template),
        }
    }

    /// Create a generator from configuration
    pub fn from_config(config: &ChangelogConfig, template: Template) -> Self {
        let types = Mapping::parse(&config.types);
        let scopes = config
            .scopes
            .as_deref()
            .map(Mapping::parse)
            .unwrap_or_default();

        Self {
            classifier: Classifier::new(types, scopes),
            renderer: TemplateRenderer::new(template).with_date_format(&config.date_format),
        }
    }

    /// Classify commits without rendering
    pub fn classify(&self, commits: &[RawCommit]) -> ClassifiedResult {
        self.classifier.classify(commits)
    }

    /// Generate the changelog text
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, version_name: &str, today: NaiveDate, commits: &[RawCommit]) -> String {
        info!(version = version_name, commit_count = commits.len(), "generating changelog");
        let classified = self.classify(commits);
        self.render(version_name, today, &classified)
    }

    /// Render already classified commits
    pub fn render(
        &self,
        version_name: &str,
        today: NaiveDate,
        classified: &ClassifiedResult,
    ) -> String {
        self.renderer.render(version_name, today, classified)
    }
}
