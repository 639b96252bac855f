//! Validated interview script.
//!
//! `ScriptConfig` is whatever the user put in `config.toml`;
//! `InterviewScript` is the checked version the session runs on. A script
//! always has at least one non-blank question, so a fresh session can
//! never start out already "ready".

use personabio_types::config::{DRAFT_SLOT_COUNT, DraftTemplateConfig, ScriptConfig};
use personabio_types::error::ScriptError;

const QUESTION_PLACEHOLDER: &str = "{question}";

/// Questions and canned replies for one interview.
#[derive(Debug, Clone)]
pub struct InterviewScript {
    questions: Vec<String>,
    greeting: String,
    follow_up: String,
    closing: String,
    supplement_ack: String,
    draft_ready: String,
    template: DraftTemplateConfig,
}

impl InterviewScript {
    /// Build a script from configuration.
    ///
    /// Questions are trimmed. Fails if there are no questions, if any
    /// question is blank, or if the draft template does not have exactly
    /// [`DRAFT_SLOT_COUNT`] labels.
    pub fn from_config(config: &ScriptConfig) -> Result<Self, ScriptError> {
        if config.questions.is_empty() {
            return Err(ScriptError::NoQuestions);
        }

        let mut questions = Vec::with_capacity(config.questions.len());
        for (index, question) in config.questions.iter().enumerate() {
            let trimmed = question.trim();
            if trimmed.is_empty() {
                return Err(ScriptError::BlankQuestion(index));
            }
            questions.push(trimmed.to_string());
        }

        if config.draft.labels.len() != DRAFT_SLOT_COUNT {
            return Err(ScriptError::LabelCount {
                expected: DRAFT_SLOT_COUNT,
                actual: config.draft.labels.len(),
            });
        }

        Ok(Self {
            questions,
            greeting: config.greeting.clone(),
            follow_up: config.follow_up.clone(),
            closing: config.closing.clone(),
            supplement_ack: config.supplement_ack.clone(),
            draft_ready: config.draft_ready.clone(),
            template: config.draft.clone(),
        })
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated script; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Opening assistant message, embedding the first question.
    pub fn greeting(&self) -> String {
        self.greeting.replace(QUESTION_PLACEHOLDER, &self.questions[0])
    }

    /// Follow-up prompt asking the question at `index`.
    ///
    /// Returns `None` past the end of the question list.
    pub fn follow_up(&self, index: usize) -> Option<String> {
        self.question(index)
            .map(|question| self.follow_up.replace(QUESTION_PLACEHOLDER, question))
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    pub fn supplement_ack(&self) -> &str {
        &self.supplement_ack
    }

    pub fn draft_ready(&self) -> &str {
        &self.draft_ready
    }

    pub fn template(&self) -> &DraftTemplateConfig {
        &self.template
    }
}

impl Default for InterviewScript {
    /// The built-in four-question Chinese script.
    fn default() -> Self {
        let config = ScriptConfig::default();
        Self {
            questions: config.questions,
            greeting: config.greeting,
            follow_up: config.follow_up,
            closing: config.closing,
            supplement_ack: config.supplement_ack,
            draft_ready: config.draft_ready,
            template: config.draft,
        }
    }
}
