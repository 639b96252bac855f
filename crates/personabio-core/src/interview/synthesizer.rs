//! DraftSynthesizer trait and the fixed-template implementation.
//!
//! The session hands its answer log to a `DraftSynthesizer` and stores
//! whatever comes back. `TemplateSynthesizer` is a plain fill-in-the-slots
//! template: no inference, no IO, same answers in means same text out.

use personabio_types::config::DraftTemplateConfig;

/// Turns an answer log into draft text.
///
/// Implementations must be pure: the output may depend only on `answers`
/// and the synthesizer's own configuration.
pub trait DraftSynthesizer {
    fn synthesize(&self, answers: &[String]) -> String;
}

/// Fills answers into the header / labeled slots / footer template.
#[derive(Debug, Clone)]
pub struct TemplateSynthesizer {
    template: DraftTemplateConfig,
}

impl TemplateSynthesizer {
    pub fn new(template: DraftTemplateConfig) -> Self {
        Self { template }
    }
}

impl Default for TemplateSynthesizer {
    fn default() -> Self {
        Self::new(DraftTemplateConfig::default())
    }
}

impl DraftSynthesizer for TemplateSynthesizer {
    fn synthesize(&self, answers: &[String]) -> String {
        let t = &self.template;
        let mut lines = Vec::with_capacity(t.labels.len() + 3);
        lines.push(t.header.clone());

        for (index, label) in t.labels.iter().enumerate() {
            let value = answers
                .get(index)
                .map(String::as_str)
                .unwrap_or(t.placeholder.as_str());
            lines.push(format!("{label}{}{value}", t.separator));
        }

        // Answers past the last slot are not part of the template.
        lines.push(String::new());
        lines.push(t.footer.clone());
        lines.join("\n")
    }
}
