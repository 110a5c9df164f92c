use chrono::{DateTime, Duration, Utc};

use crate::model::ids::QuizId;

/// Row of the quiz history list.
///
/// The backend truncates long summaries before sending them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub id: QuizId,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub question_count: u32,
}

impl QuizSummary {
    /// Case-insensitive substring match on title or summary.
    ///
    /// A blank term matches everything.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.summary.to_lowercase().contains(&needle)
    }
}

/// Aggregate counters over all stored quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStats {
    pub total_quizzes: u32,
    pub recent_quizzes: u32,
}

/// Window used for the "recent" counter.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Whether `created_at` falls inside the recent window ending at `now`.
#[must_use]
pub fn is_recent(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    created_at >= now - Duration::days(RECENT_WINDOW_DAYS)
}

/// Result of asking the backend whether a URL is a usable Wikipedia article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheck {
    pub valid: bool,
    pub message: String,
}
