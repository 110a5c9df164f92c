use std::sync::Arc;

use wikiquiz_core::model::{HistoryStats, Quiz, QuizId, QuizSummary};

use crate::backend::QuizBackend;
use crate::error::ApiError;

/// Default page size of the history list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Lists, inspects and deletes previously generated quizzes.
#[derive(Clone)]
pub struct HistoryService {
    backend: Arc<dyn QuizBackend>,
}

impl HistoryService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `ApiError` on request failures.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<QuizSummary>, ApiError> {
        self.backend.list_history(page, limit).await
    }

    /// First page with the default page size.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failures.
    pub async fn recent(&self) -> Result<Vec<QuizSummary>, ApiError> {
        self.list(1, DEFAULT_PAGE_SIZE).await
    }

    /// Full quiz behind a history row.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    pub async fn detail(&self, id: QuizId) -> Result<Quiz, ApiError> {
        self.backend.get_history_detail(id).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    pub async fn delete(&self, id: QuizId) -> Result<(), ApiError> {
        self.backend.delete_quiz(id).await?;
        log::info!("deleted quiz {id}");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` on request failures.
    pub async fn stats(&self) -> Result<HistoryStats, ApiError> {
        self.backend.stats().await
    }
}

/// Rows whose title or summary contain `term`, ignoring case.
#[must_use]
pub fn filter_summaries<'a>(items: &'a [QuizSummary], term: &str) -> Vec<&'a QuizSummary> {
    items.iter().filter(|item| item.matches(term)).collect()
}

/// Sum of question counts across `items`.
#[must_use]
pub fn total_questions(items: &[QuizSummary]) -> u32 {
    items
        .iter()
        .fold(0_u32, |sum, item| sum.saturating_add(item.question_count))
}
