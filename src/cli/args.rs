//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// osflinter - lint a project with a fixed baseline and report for CI.
#[derive(Debug, Parser)]
#[command(name = "osflinter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

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
    /// Lint the configured paths (default if no command specified)
    #[command(visible_alias = "eslintClient")]
    EslintClient(EslintClientArgs),

    /// List the baseline rules
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eslint-client` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EslintClientArgs {
    /// Directory to write an `ESLintClient.<uuid>.json` report to
    #[arg(value_name = "REPORT_DIR")]
    pub report: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_parses() {
        let cli = Cli::try_parse_from(["osflinter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn eslint_client_with_report_dir() {
        let cli = Cli::try_parse_from(["osflinter", "eslint-client", "reports"]).unwrap();
        match cli.command {
            Some(Commands::EslintClient(args)) => {
                assert_eq!(args.report, Some(PathBuf::from("reports")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn camel_case_alias_is_accepted() {
        let cli = Cli::try_parse_from(["osflinter", "eslintClient"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::EslintClient(EslintClientArgs { report: None }))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["osflinter", "rules", "--no-color", "--project", "/w"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.project, Some(PathBuf::from("/w")));
        assert!(matches!(cli.command, Some(Commands::Rules)));
    }

    #[test]
    fn completions_requires_known_shell() {
        assert!(Cli::try_parse_from(["osflinter", "completions", "zsh"]).is_ok());
        assert!(Cli::try_parse_from(["osflinter", "completions", "cmd.exe"]).is_err());
    }
}
