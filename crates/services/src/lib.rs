#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod history_service;
pub mod observer;
pub mod quiz_service;
pub mod wire;

pub use wikiquiz_core::Clock;

pub use backend::{HttpBackend, InMemoryBackend, QuizBackend};
pub use config::ApiConfig;
pub use error::{ApiError, QuizServiceError};
pub use history_service::{HistoryService, filter_summaries, total_questions};
pub use observer::{LogObserver, NoopObserver, RequestObserver};
pub use quiz_service::QuizService;
