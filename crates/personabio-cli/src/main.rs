//! PersonaBio CLI entry point.
//!
//! Binary name: `pbio`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use personabio_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "pbio", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.clone()).await?;

    let result = match cli.command {
        Commands::Interview => cli::interview::loop_runner::run_interview_loop(&state).await,
        Commands::Run {
            answers,
            answers_file,
            transcript,
        } => {
            cli::run::run_batch(&state, answers, answers_file.as_deref(), transcript, cli.json)
                .await
        }
        Commands::Questions => cli::questions::list_questions(&state, cli.json),
        Commands::Dashboard { start } => cli::dashboard::show_dashboard(&state, start, cli.json),
        Commands::Config => cli::config::check_config(&state, cli.json).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
