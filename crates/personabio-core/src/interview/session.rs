//! InterviewSession: the interview state machine.
//!
//! Owns the answer log, the supplementary bucket, the display-only message
//! history, the phase flag and the draft. Every operation runs to
//! completion synchronously and none of them can fail: blank input is
//! filtered, post-threshold input is bucketed, and premature or repeated
//! draft requests are reported through [`DraftOutcome`].

use personabio_types::interview::{
    ChatMessage, DraftOutcome, InterviewSnapshot, SessionPhase, SubmitOutcome,
};
use tracing::{debug, info};

use super::script::InterviewScript;
use super::synthesizer::{DraftSynthesizer, TemplateSynthesizer};

/// A single biography interview.
///
/// Holds the fixed script and everything the user has said so far.
/// Construct one per interview and pass it by `&mut` to whatever front end
/// drives it; there is no shared or global session state.
pub struct InterviewSession<S = TemplateSynthesizer> {
    script: InterviewScript,
    synthesizer: S,
    answers: Vec<String>,
    /// Text submitted after the answer log filled up. Never fed to the
    /// synthesizer.
    supplements: Vec<String>,
    messages: Vec<ChatMessage>,
    phase: SessionPhase,
    draft: Option<String>,
}

impl InterviewSession<TemplateSynthesizer> {
    /// Start a session that drafts with the script's own template.
    pub fn new(script: InterviewScript) -> Self {
        let synthesizer = TemplateSynthesizer::new(script.template().clone());
        Self::with_synthesizer(script, synthesizer)
    }
}

impl Default for InterviewSession<TemplateSynthesizer> {
    fn default() -> Self {
        Self::new(InterviewScript::default())
    }
}

impl<S: DraftSynthesizer> InterviewSession<S> {
    /// Start a session with a custom draft synthesizer.
    ///
    /// The message history starts with the greeting, which asks the first
    /// question.
    pub fn with_synthesizer(script: InterviewScript, synthesizer: S) -> Self {
        let greeting = ChatMessage::assistant(script.greeting());
        Self {
            answers: Vec::with_capacity(script.len()),
            script,
            synthesizer,
            supplements: Vec::new(),
            messages: vec![greeting],
            phase: SessionPhase::Collecting,
            draft: None,
        }
    }

    /// Submit one line of user input.
    ///
    /// While collecting, the trimmed text becomes the answer to the current
    /// question and the next question (or the closing acknowledgement) is
    /// appended. Once the answer log is full, text is kept as supplementary
    /// material instead. Blank input changes nothing.
    pub fn submit_answer(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("ignoring blank submission");
            return SubmitOutcome::Ignored;
        }

        self.messages.push(ChatMessage::user(trimmed));

        if self.phase != SessionPhase::Collecting {
            self.supplements.push(trimmed.to_string());
            self.messages
                .push(ChatMessage::assistant(self.script.supplement_ack()));
            debug!(
                supplements = self.supplements.len(),
                phase = %self.phase,
                "recorded supplementary material"
            );
            return SubmitOutcome::Supplement;
        }

        self.answers.push(trimmed.to_string());
        let answered = self.answers.len();

        match self.script.follow_up(answered) {
            Some(prompt) => {
                self.messages.push(ChatMessage::assistant(prompt));
                debug!(answered, total = self.script.len(), "asked next question");
                SubmitOutcome::NextQuestion {
                    index: answered,
                    question: self.script.questions()[answered].clone(),
                }
            }
            None => {
                self.phase = SessionPhase::Ready;
                self.messages
                    .push(ChatMessage::assistant(self.script.closing()));
                info!(answered, "all questions answered, session ready to draft");
                SubmitOutcome::Completed
            }
        }
    }

    /// Whether every question has an answer.
    pub fn can_synthesize(&self) -> bool {
        self.answers.len() >= self.script.len()
    }

    /// Produce the draft, once.
    ///
    /// Before every question is answered this returns `NotReady`; after the
    /// first successful call it returns `AlreadyDrafted`. Neither case
    /// changes the phase or the message history.
    pub fn synthesize_draft(&mut self) -> DraftOutcome {
        if !self.can_synthesize() {
            debug!(
                answered = self.answers.len(),
                required = self.script.len(),
                "draft requested before interview finished"
            );
            return DraftOutcome::NotReady {
                answered: self.answers.len(),
                required: self.script.len(),
            };
        }

        if self.phase == SessionPhase::Drafted {
            debug!("draft already synthesized, ignoring repeat request");
            return DraftOutcome::AlreadyDrafted;
        }

        let draft = self.synthesizer.synthesize(&self.answers);
        self.phase = SessionPhase::Drafted;
        self.draft = Some(draft.clone());
        self.messages
            .push(ChatMessage::assistant(self.script.draft_ready()));
        info!(chars = draft.chars().count(), "draft synthesized");

        DraftOutcome::Drafted { draft }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn script(&self) -> &InterviewScript {
        &self.script
    }

    pub fn questions(&self) -> &[String] {
        self.script.questions()
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn supplements(&self) -> &[String] {
        &self.supplements
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// The question waiting for an answer, or `None` once collection is over.
    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::Collecting => self.script.question(self.answers.len()),
            SessionPhase::Ready | SessionPhase::Drafted => None,
        }
    }

    /// `(answered, total)` question counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.script.len())
    }

    pub fn snapshot(&self) -> InterviewSnapshot {
        InterviewSnapshot {
            phase: self.phase,
            questions: self.script.questions().to_vec(),
            answers: self.answers.clone(),
            supplements: self.supplements.clone(),
            messages: self.messages.clone(),
            draft: self.draft.clone(),
        }
    }
}
