//! Biography dashboard: the chapter list beside the interview.

use personabio_types::config::DashboardConfig;
use personabio_types::dashboard::{ChapterOutline, ChapterStatus, WritingOutcome};
use tracing::debug;

/// Read-only view over the configured chapter outline.
pub struct Dashboard {
    chapters: Vec<ChapterOutline>,
}

impl Dashboard {
    pub fn new(chapters: Vec<ChapterOutline>) -> Self {
        Self { chapters }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.chapters.clone())
    }

    pub fn chapters(&self) -> &[ChapterOutline] {
        &self.chapters
    }

    /// `(complete, total)` chapter counts.
    pub fn progress(&self) -> (usize, usize) {
        let complete = self
            .chapters
            .iter()
            .filter(|c| c.status == ChapterStatus::Complete)
            .count();
        (complete, self.chapters.len())
    }

    /// The chapter currently being drafted, if any.
    pub fn in_progress(&self) -> Option<&ChapterOutline> {
        self.chapters
            .iter()
            .find(|c| c.status == ChapterStatus::Drafting)
    }

    /// Kick off writing the next chapter.
    ///
    /// Not wired to anything yet.
    pub fn start_writing(&self) -> WritingOutcome {
        debug!(chapters = self.chapters.len(), "start writing requested");
        WritingOutcome::Unimplemented
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, status: ChapterStatus) -> ChapterOutline {
        ChapterOutline {
            title: title.to_string(),
            status,
        }
    }

    #[test]
    fn test_default_dashboard_has_chapters() {
        let dashboard = Dashboard::default();
        assert!(!dashboard.chapters().is_empty());
        assert_eq!(dashboard.progress().1, dashboard.chapters().len());
    }

    #[test]
    fn test_progress_counts_complete_chapters() {
        let dashboard = Dashboard::new(vec![
            chapter("One", ChapterStatus::Complete),
            chapter("Two", ChapterStatus::Drafting),
            chapter("Three", ChapterStatus::Complete),
            chapter("Four", ChapterStatus::Planned),
        ]);
        assert_eq!(dashboard.progress(), (2, 4));
        assert_eq!(dashboard.in_progress().map(|c| c.title.as_str()), Some("Two"));
    }

    #[test]
    fn test_start_writing_is_explicitly_unimplemented() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.start_writing(), WritingOutcome::Unimplemented);
        // Calling it does not touch the outline.
        assert_eq!(dashboard.chapters().len(), Dashboard::default().chapters().len());
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::new(Vec::new());
        assert_eq!(dashboard.progress(), (0, 0));
        assert!(dashboard.in_progress().is_none());
    }
}
