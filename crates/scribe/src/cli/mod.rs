//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{GenerateCommand, RenderCommand, TemplateCommand};

/// Scribe - release changelog generator for conventional commits
#[derive(Debug, Parser)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors and the changelog itself
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (searched for when omitted)
    #[arg(long, global = true, env = "SCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered changelog
    #[default]
    Text,
    /// Classified commits as JSON
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the changelog of a release from the local git history
    Generate(GenerateCommand),

    /// Render a changelog from a JSON list of commits
    Render(RenderCommand),

    /// Print the bundled changelog template
    Template(TemplateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Generate(ref cmd) => cmd.execute(&self),
            Commands::Render(ref cmd) => cmd.execute(&self),
            Commands::Template(ref cmd) => cmd.execute(&self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "scribe",
            "generate",
            "--types",
            "feat:Features",
            "--current-tag",
            "v1.2",
            "--github-output",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.changelog.types.as_deref(), Some("feat:Features"));
                assert_eq!(cmd.current_tag.as_deref(), Some("v1.2"));
                assert!(cmd.changelog.github_output);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_render_requires_version() {
        assert!(Cli::try_parse_from(["scribe", "render", "--commits", "c.json"]).is_err());
    }
}
