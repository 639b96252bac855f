//! Interview session types for PersonaBio.
//!
//! These types model one biography interview: the session phase, the chat
//! messages shown to the user, and the outcomes reported by session
//! operations. The session itself lives in `personabio-core`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Lifecycle phase of an interview session.
///
/// Transitions are monotonic: `Collecting -> Ready -> Drafted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Fewer answers than questions.
    Collecting,
    /// Every question answered, draft not yet requested.
    Ready,
    /// The draft has been synthesized.
    Drafted,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Collecting => write!(f, "collecting"),
            SessionPhase::Ready => write!(f, "ready"),
            SessionPhase::Drafted => write!(f, "drafted"),
        }
    }
}

impl FromStr for SessionPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collecting" => Ok(SessionPhase::Collecting),
            "ready" => Ok(SessionPhase::Ready),
            "drafted" => Ok(SessionPhase::Drafted),
            other => Err(format!("invalid session phase: '{other}'")),
        }
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Collecting
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single entry in the interview's message history.
///
/// Messages are display-only: no session decision ever reads them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped with a fresh UUIDv7 and the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message stamped with a fresh UUIDv7 and the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// What happened to a submitted line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The text was blank after trimming; nothing changed.
    Ignored,
    /// The answer was recorded and the next question was asked.
    NextQuestion { index: usize, question: String },
    /// The final answer was recorded; the session is now ready to draft.
    Completed,
    /// The answer log was already full; the text went to the supplementary bucket.
    Supplement,
}

/// Result of asking the session for a draft.
///
/// Early and repeated requests are reported here instead of as errors: the
/// session has no failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftOutcome {
    /// The draft was produced by this call.
    Drafted { draft: String },
    /// Not every question has been answered yet.
    NotReady { answered: usize, required: usize },
    /// A draft already exists for this session; it is not regenerated.
    AlreadyDrafted,
}

/// Point-in-time, serializable view of an interview session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSnapshot {
    pub phase: SessionPhase,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub supplements: Vec<String>,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}
