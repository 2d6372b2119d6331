//! Template command

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use scribe_changelog::template::DEFAULT_TEMPLATE;

use crate::cli::{output, Cli};

/// Print the bundled changelog template
#[derive(Debug, Args)]
pub struct TemplateCommand {
    /// Write the template to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl TemplateCommand {
    /// Execute the template command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.output {
            Some(path) => {
                if path.exists() && !self.force {
                    bail!("{} already exists (use --force to overwrite)", path.display());
                }
                std::fs::write(path, DEFAULT_TEMPLATE)?;
                if !cli.quiet {
                    output::success(&format!("Template written to {}", path.display()));
                }
            }
            None => print!("{DEFAULT_TEMPLATE}"),
        }
        Ok(())
    }
}
