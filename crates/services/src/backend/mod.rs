//! Access to the quiz REST backend.

mod http;
mod memory;

use async_trait::async_trait;

use wikiquiz_core::model::{HistoryStats, Quiz, QuizId, QuizSummary, UrlCheck};

use crate::error::ApiError;

pub use http::HttpBackend;
pub use memory::InMemoryBackend;

/// Largest page size the history endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Contract of the quiz backend. Generation and persistence live there.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Generate (or return the stored) quiz for a Wikipedia article URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the URL or generation fails.
    async fn generate_quiz(&self, url: &str) -> Result<Quiz, ApiError>;

    /// Ask whether `url` points at a Wikipedia article.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be reached.
    async fn validate_url(&self, url: &str) -> Result<UrlCheck, ApiError>;

    /// Fetch a stored quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError>;

    /// One page of history, newest first. `page` starts at 1.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failures.
    async fn list_history(&self, page: u32, limit: u32) -> Result<Vec<QuizSummary>, ApiError>;

    /// Fetch a stored quiz through the history endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    async fn get_history_detail(&self, id: QuizId) -> Result<Quiz, ApiError>;

    /// Delete a stored quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` on request failures.
    async fn stats(&self) -> Result<HistoryStats, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` when the backend cannot be reached.
    async fn health(&self) -> Result<bool, ApiError>;
}

/// Clamp paging arguments to what the backend accepts.
#[must_use]
pub fn clamp_page(page: u32, limit: u32) -> (u32, u32) {
    (page.max(1), limit.clamp(1, MAX_PAGE_SIZE))
}
