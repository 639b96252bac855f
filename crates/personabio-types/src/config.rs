//! Configuration types for PersonaBio.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty file (or no file) yields the
//! built-in Chinese interview script.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ChapterOutline, ChapterStatus};

/// Number of labeled slots in the draft template.
pub const DRAFT_SLOT_COUNT: usize = 4;

/// Top-level configuration loaded from `~/.personabio/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub script: ScriptConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// All canned text the interviewer uses.
///
/// `greeting` and `follow_up` may contain a `{question}` placeholder which is
/// replaced with the question being asked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default = "default_questions")]
    pub questions: Vec<String>,

    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default = "default_follow_up")]
    pub follow_up: String,

    /// Sent once the last question has been answered.
    #[serde(default = "default_closing")]
    pub closing: String,

    /// Sent for every submission after the answer log is full.
    #[serde(default = "default_supplement_ack")]
    pub supplement_ack: String,

    /// Sent once the draft has been produced.
    #[serde(default = "default_draft_ready")]
    pub draft_ready: String,

    #[serde(default)]
    pub draft: DraftTemplateConfig,
}

fn default_questions() -> Vec<String> {
    vec![
        "你和主人公是什么关系？".to_string(),
        "你最想让读者记住主人公的哪三个特质？".to_string(),
        "有哪些关键人生节点（年份或阶段）必须写进去？".to_string(),
        "有没有一件最能代表 TA 的故事，请尽量具体描述。".to_string(),
    ]
}

fn default_greeting() -> String {
    "你好，我是你的传记采访助手。我们会通过对话收集素材，信息足够后再开始撰写。\n\n先从第一问开始：{question}"
        .to_string()
}

fn default_follow_up() -> String {
    "收到。下一问：{question}".to_string()
}

fn default_closing() -> String {
    "很好，关键素材已经收集完成。你可以输入 /write 开始撰写，我会先生成一版结构化初稿。".to_string()
}

fn default_supplement_ack() -> String {
    "我已记录这条补充信息，会在撰写时一并融合。".to_string()
}

fn default_draft_ready() -> String {
    "初稿已生成。输入 /draft 查看传记初稿。".to_string()
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            greeting: default_greeting(),
            follow_up: default_follow_up(),
            closing: default_closing(),
            supplement_ack: default_supplement_ack(),
            draft_ready: default_draft_ready(),
            draft: DraftTemplateConfig::default(),
        }
    }
}

/// Fixed draft template: header, labeled slots, footer.
///
/// Slot `i` is filled with answer `i`; `placeholder` stands in for any
/// answer that does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftTemplateConfig {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Placed between a slot label and its value.
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_footer")]
    pub footer: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_header() -> String {
    "【传记初稿（示例）】".to_string()
}

fn default_labels() -> Vec<String> {
    vec![
        "关系背景".to_string(),
        "核心特质".to_string(),
        "关键节点".to_string(),
        "代表故事".to_string(),
    ]
}

fn default_separator() -> String {
    "：".to_string()
}

fn default_footer() -> String {
    "接下来我会基于这些信息扩展为完整章节，并保持真实、克制、可读的叙事风格。".to_string()
}

fn default_placeholder() -> String {
    "未提供".to_string()
}

impl Default for DraftTemplateConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            labels: default_labels(),
            separator: default_separator(),
            footer: default_footer(),
            placeholder: default_placeholder(),
        }
    }
}

/// Chapter outline shown by `pbio dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_chapters")]
    pub chapters: Vec<ChapterOutline>,
}

fn default_chapters() -> Vec<ChapterOutline> {
    [
        ("序章：我们之间", ChapterStatus::Drafting),
        ("童年与家庭", ChapterStatus::Planned),
        ("求学与成长", ChapterStatus::Planned),
        ("事业与抉择", ChapterStatus::Planned),
        ("晚年回望", ChapterStatus::Planned),
    ]
    .into_iter()
    .map(|(title, status)| ChapterOutline {
        title: title.to_string(),
        status,
    })
    .collect()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chapters: default_chapters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_has_four_questions_and_slots() {
        let config = ScriptConfig::default();
        assert_eq!(config.questions.len(), 4);
        assert_eq!(config.draft.labels.len(), DRAFT_SLOT_COUNT);
        assert!(config.greeting.contains("{question}"));
        assert!(config.follow_up.contains("{question}"));
        assert_eq!(config.draft.placeholder, "未提供");
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.script.questions.len(), 4);
        assert_eq!(config.dashboard.chapters.len(), 5);
    }

    #[test]
    fn test_app_config_deserialize_partial_override() {
        let toml_str = r#"
[script]
questions = ["Who are they to you?", "What are they like?"]
follow_up = "Next: {question}"

[script.draft]
placeholder = "n/a"

[[dashboard.chapters]]
title = "Early years"
status = "complete"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.script.questions.len(), 2);
        assert_eq!(config.script.follow_up, "Next: {question}");
        // Untouched fields keep their defaults.
        assert_eq!(config.script.closing, default_closing());
        assert_eq!(config.script.draft.placeholder, "n/a");
        assert_eq!(config.script.draft.labels.len(), DRAFT_SLOT_COUNT);
        assert_eq!(config.dashboard.chapters.len(), 1);
        assert_eq!(config.dashboard.chapters[0].status, ChapterStatus::Complete);
    }

    #[test]
    fn test_draft_separator_override() {
        let toml_str = r#"
[script.draft]
separator = ": "
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.script.draft.separator, ": ");
        assert_eq!(config.script.draft.placeholder, default_placeholder());

        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.script.draft.separator, "：");
    }

    #[test]
    fn test_app_config_serde_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.script.questions, config.script.questions);
        assert_eq!(parsed.dashboard.chapters, config.dashboard.chapters);
    }
}
