//! Shared error types for the services crate.

use thiserror::Error;

const NETWORK_UNREACHABLE: &str =
    "Network error: Unable to connect to the server. Please check if the backend is running.";

/// Errors emitted by a `QuizBackend`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("quiz not found")]
    NotFound,
    #[error("backend request failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Text suitable for showing to the user.
    ///
    /// Prefers the backend's `detail` field, then `HTTP <code>: <reason>`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, detail } => detail.clone().unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            }),
            ApiError::Http(err) if err.is_connect() || err.is_timeout() => {
                NETWORK_UNREACHABLE.to_string()
            }
            ApiError::Http(err) if err.is_decode() => {
                "Unexpected response from the server.".to_string()
            }
            ApiError::Http(err) => format!("Network error: {err}"),
            ApiError::Unavailable(_) => NETWORK_UNREACHABLE.to_string(),
            ApiError::NotFound => "The requested quiz could not be found.".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::InvalidBaseUrl(_) => self.to_string(),
        }
    }

    /// HTTP status code when the backend answered, 0 otherwise.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => status.as_u16(),
            ApiError::NotFound => 404,
            ApiError::Http(err) => err.status().map_or(0, |s| s.as_u16()),
            _ => 0,
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("article URL is empty")]
    EmptyUrl,
    #[error("not a Wikipedia article URL: {url}")]
    InvalidUrl { url: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl QuizServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            QuizServiceError::EmptyUrl | QuizServiceError::InvalidUrl { .. } => {
                "Please enter a valid Wikipedia article URL".to_string()
            }
            QuizServiceError::Api(err) => err.user_message(),
        }
    }
}
