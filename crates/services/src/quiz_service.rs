use std::sync::Arc;

use wikiquiz_core::model::{Quiz, QuizId, UrlCheck};

use crate::backend::QuizBackend;
use crate::error::{ApiError, QuizServiceError};

/// Generates quizzes and loads stored ones.
#[derive(Clone)]
pub struct QuizService {
    backend: Arc<dyn QuizBackend>,
}

impl QuizService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self { backend }
    }

    /// Ask the backend whether `url` is a usable article URL.
    ///
    /// Blank input is reported invalid without a request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be reached.
    pub async fn check_url(&self, url: &str) -> Result<UrlCheck, ApiError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(UrlCheck {
                valid: false,
                message: String::new(),
            });
        }
        self.backend.validate_url(url).await
    }

    /// Validate `url` and generate a quiz from it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::EmptyUrl` for blank input,
    /// `QuizServiceError::InvalidUrl` when the backend rejects the URL, or
    /// `QuizServiceError::Api` for request failures.
    pub async fn generate(&self, url: &str) -> Result<Quiz, QuizServiceError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(QuizServiceError::EmptyUrl);
        }
        let check = self.backend.validate_url(url).await?;
        if !check.valid {
            return Err(QuizServiceError::InvalidUrl {
                url: url.to_string(),
            });
        }

        log::info!("generating quiz for {url}");
        let quiz = self.backend.generate_quiz(url).await?;
        log::info!(
            "quiz ready: {:?} with {} questions",
            quiz.id,
            quiz.questions.len()
        );
        Ok(quiz)
    }

    /// Load a stored quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, or other request errors.
    pub async fn open(&self, id: QuizId) -> Result<Quiz, ApiError> {
        self.backend.get_quiz(id).await
    }

    /// Whether the backend reports itself healthy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend cannot be reached.
    pub async fn health(&self) -> Result<bool, ApiError> {
        self.backend.health().await
    }
}
