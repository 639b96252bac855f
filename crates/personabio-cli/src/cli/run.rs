//! Non-interactive interview (`pbio run`).
//!
//! Feeds a fixed list of answers through a session exactly as if they had
//! been typed, then requests the draft.

use std::path::Path;

use anyhow::Context;
use console::style;

use personabio_core::interview::session::InterviewSession;
use personabio_types::interview::DraftOutcome;

use crate::cli::interview::render;
use crate::state::AppState;

/// Submit every answer in order, then ask for the draft.
pub fn drive(session: &mut InterviewSession, answers: &[String]) -> DraftOutcome {
    for answer in answers {
        session.submit_answer(answer);
    }
    session.synthesize_draft()
}

async fn read_answers_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

pub async fn run_batch(
    state: &AppState,
    answers: Vec<String>,
    answers_file: Option<&Path>,
    transcript: bool,
    json: bool,
) -> anyhow::Result<()> {
    let answers = match answers_file {
        Some(path) => read_answers_file(path).await?,
        None => answers,
    };

    let mut session = state.new_session();
    let outcome = drive(&mut session, &answers);
    tracing::debug!(?outcome, "batch interview finished");

    if json {
        let output = serde_json::json!({
            "outcome": outcome,
            "session": session.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if transcript {
        render::print_history(&session);
    }

    match outcome {
        DraftOutcome::Drafted { .. } => render::print_draft(&session),
        DraftOutcome::NotReady { answered, required } => {
            println!();
            println!(
                "  {} Only {answered} of {required} questions answered; no draft written.",
                style("!").yellow().bold()
            );
            if let Some(question) = session.current_question() {
                println!("  {} {}", style("Next question:").bold(), question);
            }
            println!();
        }
        // A fresh session cannot already hold a draft.
        DraftOutcome::AlreadyDrafted => render::print_draft(&session),
    }

    Ok(())
}
