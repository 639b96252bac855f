//! CLI command definitions for the `pbio` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod config;
pub mod dashboard;
pub mod interview;
pub mod questions;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use personabio_infra::paths::DATA_DIR_ENV;

/// Interview someone about a person and turn the answers into a biography draft.
#[derive(Parser)]
#[command(name = "pbio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Data directory holding config.toml (default: ~/.personabio).
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive interview.
    #[command(alias = "chat")]
    Interview,

    /// Feed a fixed list of answers through an interview and print the draft.
    Run {
        /// An answer, in question order. Repeat for each question.
        #[arg(short, long = "answer", value_name = "TEXT")]
        answers: Vec<String>,

        /// Read answers from a file, one per line.
        #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "answers")]
        answers_file: Option<PathBuf>,

        /// Print the full message transcript before the draft.
        #[arg(long)]
        transcript: bool,
    },

    /// List the interview questions.
    Questions,

    /// Show the chapter dashboard.
    Dashboard {
        /// Try to start writing the next chapter.
        #[arg(long)]
        start: bool,
    },

    /// Validate and show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_answers() {
        let cli = Cli::try_parse_from(["pbio", "run", "-a", "friend", "--answer", "kind"]).unwrap();
        match cli.command {
            Commands::Run {
                answers,
                answers_file,
                transcript,
            } => {
                assert_eq!(answers, vec!["friend", "kind"]);
                assert!(answers_file.is_none());
                assert!(!transcript);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_answers_conflict_with_file() {
        let result = Cli::try_parse_from(["pbio", "run", "-a", "x", "-f", "answers.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pbio", "questions", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_chat_alias() {
        let cli = Cli::try_parse_from(["pbio", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Interview));
    }
}
