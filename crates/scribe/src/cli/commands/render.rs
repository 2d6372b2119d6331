//! Render command

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use scribe_changelog::types::commits_from_json;

use super::shared::{run_pipeline, ChangelogArgs, Settings};
use crate::cli::Cli;

/// Render a changelog from a JSON list of commits
#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub changelog: ChangelogArgs,

    /// JSON file of `[{"commit": {"message": ...}, "html_url": ...}]`, or - for stdin
    #[arg(long, value_name = "FILE")]
    pub commits: PathBuf,

    /// Version name for the {{versionName}} placeholder
    #[arg(long, value_name = "VERSION")]
    pub version_name: String,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            commits = %self.commits.display(),
            version = %self.version_name,
            "executing render command"
        );
        let settings = Settings::load(cli, &self.changelog)?;

        let json = if self.commits.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(&self.commits)
                .with_context(|| format!("failed to read {}", self.commits.display()))?
        };
        let commits = commits_from_json(&json).context("invalid commit list")?;

        run_pipeline(cli, &self.changelog, &settings, &self.version_name, &commits)
    }
}
