//! CLI for profcard.

mod commands;
mod form_args;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use profcard_core::config::{self, ProfcardConfig};
use profcard_core::Platform;
use std::path::PathBuf;

pub use form_args::FormArgs;

use commands::{run_export, run_generate, run_share, run_username, run_validate};

/// Top-level CLI for profcard.
#[derive(Debug, Parser)]
#[command(name = "profcard")]
#[command(about = "profcard: profile cards from social media links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that a URL belongs to a platform (exit status 1 if not).
    Validate {
        /// linkedin, facebook, instagram or github.
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Profile URL; the https:// scheme is optional.
        url: String,
    },

    /// Print the handle extracted from a profile URL.
    Username {
        /// linkedin, facebook, instagram or github.
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Profile URL; the https:// scheme is optional.
        url: String,
    },

    /// Build a profile card and print it.
    Generate {
        #[command(flatten)]
        form: FormArgs,
        /// Print a text card or the full profile as JSON.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Build the card even if the form has errors.
        #[arg(long)]
        allow_invalid: bool,
    },

    /// Build a profile card and write it as `<Name>_profile.json`.
    Export {
        #[command(flatten)]
        form: FormArgs,
        /// Directory for the export file (default: config export_dir, else current dir).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Export even if the form has errors.
        #[arg(long)]
        allow_invalid: bool,
    },

    /// Print the share title and text for a profile card.
    Share {
        #[command(flatten)]
        form: FormArgs,
        /// Share even if the form has errors.
        #[arg(long)]
        allow_invalid: bool,
    },
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse::<Platform>().map_err(|e| e.to_string())
}

fn load_config() -> Result<ProfcardConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().command.run(load_config)
    }

    /// Runs the command; `load_cfg` is only called by commands that build a card.
    pub fn run<F>(self, load_cfg: F) -> Result<()>
    where
        F: FnOnce() -> Result<ProfcardConfig>,
    {
        match self {
            CliCommand::Validate { platform, url } => run_validate(platform, &url)?,
            CliCommand::Username { platform, url } => run_username(platform, &url),
            CliCommand::Generate {
                form,
                format,
                allow_invalid,
            } => {
                let cfg = load_cfg()?;
                run_generate(&cfg, &form, format, allow_invalid)?;
            }
            CliCommand::Export {
                form,
                out_dir,
                allow_invalid,
            } => {
                let cfg = load_cfg()?;
                let dir = match out_dir.or_else(|| cfg.export_dir.clone()) {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_export(&cfg, &form, &dir, allow_invalid)?;
            }
            CliCommand::Share {
                form,
                allow_invalid,
            } => {
                let cfg = load_cfg()?;
                run_share(&cfg, &form, allow_invalid)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
