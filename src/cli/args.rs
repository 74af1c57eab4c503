//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// obsolint - Find obsolete analyzer options in your configuration.
#[derive(Debug, Parser)]
#[command(name = "obsolint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .obsolint/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check analysis units for obsolete options (default if no command specified)
    Check(CheckArgs),

    /// List obsolete options and whether their rules are active
    Rules(RulesArgs),

    /// Print the JSON Schema of the configuration file
    Schema,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Analysis units to check, relative to the project root
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_paths_and_format() {
        let cli = Cli::parse_from([
            "obsolint",
            "check",
            "src/A.cs",
            "src/B.cs",
            "--format",
            "sarif",
            "--strict",
        ]);

        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.paths, vec![PathBuf::from("src/A.cs"), PathBuf::from("src/B.cs")]);
                assert_eq!(args.format, OutputFormat::Sarif);
                assert!(args.strict);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn check_defaults_to_human_format() {
        let cli = Cli::parse_from(["obsolint", "check"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.format, OutputFormat::Human);
                assert!(args.paths.is_empty());
                assert!(!args.strict);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["obsolint", "rules", "--json", "--no-color", "-p", "/tmp/p"]);
        assert!(cli.no_color);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/p")));
        assert!(matches!(cli.command, Some(Commands::Rules(RulesArgs { json: true }))));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["obsolint"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["obsolint", "check", "--format", "xml"]).is_err());
    }
}
