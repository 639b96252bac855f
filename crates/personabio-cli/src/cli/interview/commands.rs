//! Slash command parsing for the interview loop.
//!
//! Commands start with `/`. Anything else is an answer.

use console::style;

/// Available slash commands in the interview loop.
#[derive(Debug, PartialEq)]
pub enum InterviewCommand {
    /// Show available commands.
    Help,
    /// Show the interview status header.
    Status,
    /// Synthesize the draft.
    Write,
    /// Show the draft.
    Draft,
    /// Show the conversation so far.
    History,
    /// Clear the terminal screen.
    Clear,
    /// End the interview.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<InterviewCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(InterviewCommand::Help),
        "/status" | "/s" => Some(InterviewCommand::Status),
        "/write" | "/w" => Some(InterviewCommand::Write),
        "/draft" | "/d" => Some(InterviewCommand::Draft),
        "/history" => Some(InterviewCommand::History),
        "/clear" | "/cls" => Some(InterviewCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(InterviewCommand::Exit),
        other => Some(InterviewCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}   {}", style("/status").cyan(), "Show interview progress");
    println!("  {}    {}", style("/write").cyan(), "Write the draft once every question is answered");
    println!("  {}    {}", style("/draft").cyan(), "Show the draft");
    println!("  {}  {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/exit").cyan(), "End the interview");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(InterviewCommand::Help));
        assert_eq!(parse("/h"), Some(InterviewCommand::Help));
        assert_eq!(parse("/?"), Some(InterviewCommand::Help));
    }

    #[test]
    fn test_parse_write_and_draft() {
        assert_eq!(parse("/write"), Some(InterviewCommand::Write));
        assert_eq!(parse("  /W  "), Some(InterviewCommand::Write));
        assert_eq!(parse("/draft"), Some(InterviewCommand::Draft));
        assert_eq!(parse("/d"), Some(InterviewCommand::Draft));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(InterviewCommand::Exit));
        assert_eq!(parse("/quit"), Some(InterviewCommand::Exit));
        assert_eq!(parse("/q"), Some(InterviewCommand::Exit));
    }

    #[test]
    fn test_parse_ignores_trailing_arguments() {
        assert_eq!(parse("/status now"), Some(InterviewCommand::Status));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("my grandmother"), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo bar"),
            Some(InterviewCommand::Unknown("/foo".to_string()))
        );
    }
}
