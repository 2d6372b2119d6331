//! Options and steps shared by the changelog commands

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use scribe_changelog::{ChangelogGenerator, RawCommit, Template, TypeBucket};
use scribe_core::config::{load_config, load_config_or_default, validate_config, Config};

use crate::cli::{output, Cli, OutputFormat};

/// Name of the CI output carrying the changelog
pub const GITHUB_OUTPUT_NAME: &str = "changelog";

const GITHUB_OUTPUT_DELIMITER: &str = "SCRIBE_CHANGELOG_EOF";

/// Classification and output options
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Type mapping, e.g. "feat:Features,fix:Bug Fixes"
    #[arg(long, env = "SCRIBE_TYPES")]
    pub types: Option<String>,

    /// Scope mapping, e.g. "api:API,ui:User Interface"
    #[arg(long, env = "SCRIBE_SCOPES")]
    pub scopes: Option<String>,

    /// Custom template file
    #[arg(long, env = "SCRIBE_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// strftime format for the {{date}} placeholder
    #[arg(long)]
    pub date_format: Option<String>,

    /// Write the changelog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also append the changelog to the file named by $GITHUB_OUTPUT
    #[arg(long)]
    pub github_output: bool,
}

/// Loaded configuration plus the directory relative paths resolve against
pub struct Settings {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl Settings {
    /// Load configuration and apply command-line overrides
    pub fn load(cli: &Cli, args: &ChangelogArgs) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(cli.config.as_deref(), args, &cwd)
    }

    /// Like [`Settings::load`], relative to an explicit working directory.
    ///
    /// A template given as a flag resolves against `cwd`; one named in the
    /// config file resolves against that file's directory.
    pub fn resolve(
        config: Option<&Path>,
        args: &ChangelogArgs,
        cwd: &Path,
    ) -> anyhow::Result<Self> {
        let (mut config, config_path) = match config {
            Some(path) => {
                let path = cwd.join(path);
                (load_config(&path)?, Some(path))
            }
            None => load_config_or_default(cwd)?,
        };

        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        if let Some(types) = &args.types {
            config.changelog.types = types.clone();
        }
        if let Some(scopes) = &args.scopes {
            config.changelog.scopes = Some(scopes.clone());
        }
        if let Some(template) = &args.template {
            config.changelog.template = Some(cwd.join(template));
        }
        if let Some(format) = &args.date_format {
            config.changelog.date_format = format.clone();
        }

        validate_config(&config)?;
        debug!(base_dir = %base_dir.display(), "settings loaded");
        Ok(Self { config, base_dir })
    }

    /// Load the configured template, or the bundled one
    pub fn template(&self) -> anyhow::Result<Template> {
        let path = self.config.changelog.template_path(&self.base_dir);
        Template::load_or_bundled(path.as_deref())
            .with_context(|| match &path {
                Some(p) => format!("failed to load template {}", p.display()),
                None => "failed to load bundled template".to_string(),
            })
    }
}

#[derive(Serialize)]
struct Report<'a> {
    version: &'a str,
    sections: &'a [TypeBucket],
}

/// Classify, render and deliver a changelog
pub fn run_pipeline(
    cli: &Cli,
    args: &ChangelogArgs,
    settings: &Settings,
    version_name: &str,
    commits: &[RawCommit],
) -> anyhow::Result<()> {
    let template = settings.template()?;
    let generator = ChangelogGenerator::from_config(&settings.config.changelog, template);
    let classified = generator.classify(commits);

    if classified.is_empty() && !cli.quiet {
        output::warning("No commits matched the configured types.");
    }

    let changelog = match cli.format {
        OutputFormat::Json => {
            let report = Report {
                version: version_name,
                sections: &classified.buckets,
            };
            serde_json::to_string_pretty(&report)?
        }
        OutputFormat::Text => {
            let today = Local::now().date_naive();
            generator.render(version_name, today, &classified)
        }
    };

    deliver(cli, args, &changelog)
}

fn deliver(cli: &Cli, args: &ChangelogArgs, changelog: &str) -> anyhow::Result<()> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, changelog)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "changelog written");
            if !cli.quiet {
                output::success(&format!("Changelog written to {}", path.display()));
            }
        }
        None => println!("{changelog}"),
    }

    if args.github_output {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) => {
                write_github_output(Path::new(&path), GITHUB_OUTPUT_NAME, changelog)?;
                if !cli.quiet {
                    output::success("Changelog set as step output");
                }
            }
            None => output::warning("--github-output given but $GITHUB_OUTPUT is not set"),
        }
    }

    Ok(())
}

/// Append a multi-line `name<<DELIMITER` entry to a CI output file
pub fn write_github_output(path: &Path, name: &str, value: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let delimiter = output_delimiter(value);
    writeln!(file, "{name}<<{delimiter}")?;
    writeln!(file, "{value}")?;
    writeln!(file, "{delimiter}")?;
    debug!(path = %path.display(), name, %delimiter, "wrote step output");
    Ok(())
}

/// Heredoc delimiter that does not occur as a line of `value`
fn output_delimiter(value: &str) -> String {
    let mut delimiter = GITHUB_OUTPUT_DELIMITER.to_string();
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    delimiter
}
