//! `pbio questions`: list the interview questions in order.

use console::style;

use crate::state::AppState;

pub fn list_questions(state: &AppState, json: bool) -> anyhow::Result<()> {
    let questions = state.script.questions();

    if json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Interview questions").bold());
    println!();
    for (index, question) in questions.iter().enumerate() {
        println!("  {} {}", style(format!("{:>2}.", index + 1)).cyan(), question);
    }
    println!();
    Ok(())
}
