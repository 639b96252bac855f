//! Dashboard types: the chapter outline shown beside the interview.
//!
//! Chapters are read-only display rows. Nothing in PersonaBio writes them
//! back anywhere.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Progress marker for a single chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    Planned,
    Drafting,
    Complete,
}

impl fmt::Display for ChapterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterStatus::Planned => write!(f, "planned"),
            ChapterStatus::Drafting => write!(f, "drafting"),
            ChapterStatus::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for ChapterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ChapterStatus::Planned),
            "drafting" => Ok(ChapterStatus::Drafting),
            "complete" => Ok(ChapterStatus::Complete),
            other => Err(format!("invalid chapter status: '{other}'")),
        }
    }
}

impl Default for ChapterStatus {
    fn default() -> Self {
        ChapterStatus::Planned
    }
}

/// One row of the chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterOutline {
    pub title: String,
    #[serde(default)]
    pub status: ChapterStatus,
}

/// Result of the dashboard's "start writing" action.
///
/// The action is not wired to anything yet; callers get an explicit
/// `Unimplemented` instead of a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WritingOutcome {
    Unimplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_status_roundtrip() {
        for status in [
            ChapterStatus::Planned,
            ChapterStatus::Drafting,
            ChapterStatus::Complete,
        ] {
            let parsed: ChapterStatus = status.to_string().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_chapter_outline_status_defaults_to_planned() {
        let chapter: ChapterOutline = serde_json::from_str(r#"{"title":"Childhood"}"#).unwrap();
        assert_eq!(chapter.status, ChapterStatus::Planned);
    }

    #[test]
    fn test_writing_outcome_json() {
        let json = serde_json::to_string(&WritingOutcome::Unimplemented).unwrap();
        assert_eq!(json, r#"{"type":"unimplemented"}"#);
    }
}
