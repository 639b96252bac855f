//! Interactive interview in the terminal.
//!
//! Implements the chat loop around an `InterviewSession`: welcome banner,
//! async line input, slash commands, and message rendering. Entry point:
//! `loop_runner::run_interview_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod render;
