use wikiquiz_core::model::{HistoryStats, QuizId, QuizSummary};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub id: QuizId,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub created_at_str: String,
    pub question_count_str: String,
}

impl From<&QuizSummary> for HistoryCardVm {
    fn from(item: &QuizSummary) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            summary: item.summary.clone(),
            url: item.url.clone(),
            created_at_str: format_datetime(item.created_at),
            question_count_str: format!("{} questions", item.question_count),
        }
    }
}

#[must_use]
pub fn map_history_cards(items: &[&QuizSummary]) -> Vec<HistoryCardVm> {
    items.iter().map(|item| HistoryCardVm::from(*item)).collect()
}

/// Counters of the stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryStatsVm {
    pub total_quizzes: u32,
    pub this_week: u32,
    pub total_questions: u32,
}

impl HistoryStatsVm {
    #[must_use]
    pub fn new(stats: HistoryStats, total_questions: u32) -> Self {
        Self {
            total_quizzes: stats.total_quizzes,
            this_week: stats.recent_quizzes,
            total_questions,
        }
    }
}

/// Heading and hint for an empty list. Searching and an empty store read
/// differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyHistoryVm {
    pub heading: &'static str,
    pub hint: &'static str,
    pub offer_generate: bool,
}

#[must_use]
pub fn empty_history(search: &str) -> EmptyHistoryVm {
    if search.trim().is_empty() {
        EmptyHistoryVm {
            heading: "No quizzes yet",
            hint: "Generate your first quiz to get started",
            offer_generate: true,
        }
    } else {
        EmptyHistoryVm {
            heading: "No quizzes found",
            hint: "Try adjusting your search terms",
            offer_generate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiquiz_core::time::fixed_now;

    #[test]
    fn card_formats_counts() {
        let item = QuizSummary {
            id: QuizId::new(4),
            url: "https://en.wikipedia.org/wiki/Renaissance".into(),
            title: "Renaissance".into(),
            summary: "Period of European history".into(),
            created_at: fixed_now(),
            question_count: 7,
        };
        let cards = map_history_cards(&[&item]);
        assert_eq!(cards[0].id, QuizId::new(4));
        assert_eq!(cards[0].question_count_str, "7 questions");
        assert!(!cards[0].created_at_str.is_empty());
    }

    #[test]
    fn empty_state_depends_on_search() {
        assert_eq!(empty_history("").heading, "No quizzes yet");
        assert!(empty_history("").offer_generate);
        assert_eq!(empty_history("turing").heading, "No quizzes found");
        assert!(!empty_history("turing").offer_generate);
    }

    #[test]
    fn blank_search_reads_as_empty_store() {
        assert_eq!(empty_history("   ").heading, "No quizzes yet");
        assert!(empty_history("\t").offer_generate);
    }
}
