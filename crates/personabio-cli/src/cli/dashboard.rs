//! `pbio dashboard`: the chapter list and its (not yet wired) writing action.

use console::style;

use personabio_types::dashboard::{ChapterStatus, WritingOutcome};

use crate::state::AppState;

fn status_marker(status: ChapterStatus) -> String {
    match status {
        ChapterStatus::Planned => style("○").dim().to_string(),
        ChapterStatus::Drafting => style("◐").yellow().to_string(),
        ChapterStatus::Complete => style("●").green().to_string(),
    }
}

pub fn show_dashboard(state: &AppState, start: bool, json: bool) -> anyhow::Result<()> {
    let dashboard = state.dashboard();
    let writing = start.then(|| dashboard.start_writing());

    if json {
        let (complete, total) = dashboard.progress();
        let output = serde_json::json!({
            "chapters": dashboard.chapters(),
            "complete": complete,
            "total": total,
            "start_writing": writing,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let (complete, total) = dashboard.progress();
    println!();
    println!(
        "  {}  {}",
        style("Chapters").bold(),
        style(format!("{complete}/{total} complete")).dim()
    );
    println!();
    for (index, chapter) in dashboard.chapters().iter().enumerate() {
        println!(
            "  {} {:>2}. {}  {}",
            status_marker(chapter.status),
            index + 1,
            chapter.title,
            style(chapter.status).dim()
        );
    }
    println!();

    if let Some(WritingOutcome::Unimplemented) = writing {
        println!(
            "  {} Starting a chapter is not implemented yet.",
            style("!").yellow().bold()
        );
        println!();
    }

    Ok(())
}
