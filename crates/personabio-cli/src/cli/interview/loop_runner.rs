//! Main interview loop.
//!
//! Creates a session, prints the banner and greeting, then alternates
//! between reading a line and either running a slash command or submitting
//! the line as an answer.

use console::style;
use tracing::info;

use personabio_types::interview::{DraftOutcome, SubmitOutcome};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, InterviewCommand};
use super::input::{InputEvent, InterviewInput};
use super::render;

const PROMPT: &str = "> ";

/// Run an interactive interview until the user exits.
pub async fn run_interview_loop(state: &AppState) -> anyhow::Result<()> {
    let mut session = state.new_session();

    print_welcome_banner(
        session.questions().len(),
        &state.data_dir.display().to_string(),
    );
    render::print_replies_since(&session, 0);

    let (mut input, _writer) = InterviewInput::new(PROMPT.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}. Use `pbio run` for non-interactive input."))?;

    info!(questions = session.questions().len(), "interview started");

    loop {
        let line = match input.read_line().await {
            InputEvent::Line(line) => line,
            event if event.ends_session() => break,
            _ => continue,
        };

        if let Some(command) = commands::parse(&line) {
            match command {
                InterviewCommand::Help => commands::print_help(),
                InterviewCommand::Status => render::print_status(&session),
                InterviewCommand::Write => {
                    let before = session.messages().len();
                    match session.synthesize_draft() {
                        DraftOutcome::Drafted { .. } => {
                            render::print_replies_since(&session, before);
                            render::print_draft(&session);
                            render::print_write_tip(&session);
                        }
                        DraftOutcome::NotReady { answered, required } => {
                            println!(
                                "\n  {} Answer every question first ({answered}/{required} so far).\n",
                                style("!").yellow().bold()
                            );
                        }
                        DraftOutcome::AlreadyDrafted => {
                            println!(
                                "\n  {} The draft has already been written. Type /draft to read it.\n",
                                style("*").cyan().bold()
                            );
                        }
                    }
                }
                InterviewCommand::Draft => render::print_draft(&session),
                InterviewCommand::History => render::print_history(&session),
                InterviewCommand::Clear => input.clear(),
                InterviewCommand::Exit => break,
                InterviewCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        let before = session.messages().len();
        match session.submit_answer(&line) {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::NextQuestion { .. } | SubmitOutcome::Supplement => {
                println!();
                render::print_replies_since(&session, before);
            }
            SubmitOutcome::Completed => {
                println!();
                render::print_replies_since(&session, before);
                render::print_write_tip(&session);
            }
        }
    }

    input.flush();
    let (answered, total) = session.progress();
    info!(answered, total, phase = %session.phase(), "interview ended");
    println!(
        "\n  {} ({answered}/{total} answered, phase: {})",
        style("Interview ended.").dim(),
        session.phase()
    );

    Ok(())
}
