//! Async readline input handling for the interview loop.
//!
//! Wraps `rustyline_async::Readline` to provide async line reading with
//! proper handling of EOF (Ctrl+D) and interrupt (Ctrl+C) signals.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (not trimmed; the session does that).
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

impl InputEvent {
    /// Ctrl+D and Ctrl+C both end the interview.
    pub fn ends_session(&self) -> bool {
        matches!(self, InputEvent::Eof | InputEvent::Interrupted)
    }
}

/// Async input handler wrapping rustyline_async.
pub struct InterviewInput {
    rl: Readline,
}

impl InterviewInput {
    /// Create a new input handler with the given prompt.
    ///
    /// Returns the handler and a `SharedWriter` that can print without
    /// clobbering the prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_and_interrupt_end_session() {
        assert!(InputEvent::Eof.ends_session());
        assert!(InputEvent::Interrupted.ends_session());
    }

    #[test]
    fn test_line_does_not_end_session() {
        assert!(!InputEvent::Line("/exit".to_string()).ends_session());
        assert!(!InputEvent::Line(String::new()).ends_session());
    }
}
