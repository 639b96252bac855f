//! Terminal rendering for interview messages, status, and the draft.

use console::style;

use personabio_core::interview::session::InterviewSession;
use personabio_types::interview::{ChatMessage, MessageRole, SessionPhase};

/// Status header title and caption for a phase.
pub fn status_header(phase: SessionPhase) -> (&'static str, &'static str) {
    match phase {
        SessionPhase::Collecting => (
            "采访进行中",
            "请按问题逐步回答，素材足够后即可进入撰写阶段。",
        ),
        SessionPhase::Ready => (
            "采访已完成",
            "核心素材已收集完毕，输入 /write 开始撰写初稿。",
        ),
        SessionPhase::Drafted => ("正在撰写中", "已收集核心素材，传记初稿已生成。"),
    }
}

/// Indent every line of `text` by `prefix`, keeping blank lines blank.
pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn role_label(role: MessageRole) -> String {
    match role {
        MessageRole::Assistant => style("Interviewer").cyan().bold().to_string(),
        MessageRole::User => style("You").green().bold().to_string(),
    }
}

pub fn print_message(message: &ChatMessage) {
    println!("  {}", role_label(message.role));
    println!("{}", indent(&message.content, "  "));
    println!();
}

/// Print the assistant replies appended since `from`.
///
/// The user's own line is already on screen, so it is skipped.
pub fn print_replies_since(session: &InterviewSession, from: usize) {
    for message in session.messages().iter().skip(from) {
        if message.role == MessageRole::Assistant {
            print_message(message);
        }
    }
}

pub fn print_status(session: &InterviewSession) {
    let (title, caption) = status_header(session.phase());
    let (answered, total) = session.progress();

    println!();
    println!("  {}", style(title).bold());
    println!("  {}", style(caption).dim());
    println!(
        "  {} {answered}/{total}  {} {}",
        style("Answered:").bold(),
        style("Phase:").bold(),
        session.phase()
    );
    if !session.supplements().is_empty() {
        println!(
            "  {} {}",
            style("Supplementary notes:").bold(),
            session.supplements().len()
        );
    }
    if let Some(question) = session.current_question() {
        println!("  {} {}", style("Current question:").bold(), question);
    }
    println!();
    if session.can_synthesize() {
        print_write_tip(session);
    }
}

/// Hint line for the "material is sufficient" tip.
pub fn write_tip(has_draft: bool) -> &'static str {
    if has_draft {
        "你可以继续补充细节，或输入 /draft 进入初稿查看。"
    } else {
        "你可以继续补充细节，或输入 /write 生成第一版人物传记。"
    }
}

/// Tip shown whenever every question has an answer.
pub fn print_write_tip(session: &InterviewSession) {
    println!("  {} {}", style("✓").green().bold(), style("素材已足够").green().bold());
    println!("  {}", style(write_tip(session.draft().is_some())).dim());
    println!();
}

pub fn print_draft(session: &InterviewSession) {
    println!();
    match session.draft() {
        Some(draft) => {
            println!("  {}", style("传记初稿").bold().underlined());
            println!();
            println!("{}", indent(draft, "  "));
        }
        None => {
            println!("  {}", style("暂无初稿").yellow().bold());
            println!(
                "  {}",
                style("请先在采访中完成素材收集，并输入 /write。").dim()
            );
        }
    }
    println!();
}

pub fn print_history(session: &InterviewSession) {
    println!();
    for message in session.messages() {
        print_message(message);
    }
}
