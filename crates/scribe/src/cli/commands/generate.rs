//! Generate command

use clap::Args;
use tracing::info;

use scribe_changelog::RawCommit;
use scribe_core::config::validate_config;
use scribe_git::{commit_permalink, GitRepo};

use super::shared::{run_pipeline, ChangelogArgs, Settings};
use crate::cli::{output, Cli};

/// Generate the changelog of a release from the local git history
#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub changelog: ChangelogArgs,

    /// Substring selecting the current release tag (newest when omitted)
    #[arg(long, env = "SCRIBE_CURRENT_TAG")]
    pub current_tag: Option<String>,

    /// Pattern the previous release tag must match
    #[arg(long, env = "SCRIBE_TAG_REGEX")]
    pub tag_regex: Option<String>,

    /// Base URL for commit links, e.g. https://github.com/owner/repo
    #[arg(long, env = "SCRIBE_LINK_BASE")]
    pub link_base: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            current_tag = ?self.current_tag,
            tag_regex = ?self.tag_regex,
            "executing generate command"
        );
        let mut settings = Settings::load(cli, &self.changelog)?;

        let git = &mut settings.config.git;
        if self.current_tag.is_some() {
            git.current_tag.clone_from(&self.current_tag);
        }
        if self.tag_regex.is_some() {
            git.tag_regex.clone_from(&self.tag_regex);
        }
        if self.link_base.is_some() {
            git.link_base.clone_from(&self.link_base);
        }
        validate_config(&settings.config)?;

        let git = &settings.config.git;
        let repo = GitRepo::discover(&std::env::current_dir()?)?;
        let range = repo.resolve_range(git.current_tag.as_deref(), git.tag_regex.as_deref())?;
        info!(
            workdir = %repo.workdir().display(),
            version = %range.version_name,
            "resolved release range"
        );
        let commits = repo.release_commits(&range)?;

        let link_base = git
            .link_base
            .clone()
            .or_else(|| repo.remote_web_url(&git.remote));
        let commits: Vec<RawCommit> = commits
            .into_iter()
            .map(|c| {
                let link = commit_permalink(link_base.as_deref(), &c.hash);
                RawCommit::new(c.message).with_link(link)
            })
            .collect();

        if !cli.quiet {
            output::info(&format!(
                "Generating changelog for {} ({} commits)",
                range.version_name,
                commits.len()
            ));
        }

        run_pipeline(cli, &self.changelog, &settings, &range.version_name, &commits)
    }
}
