use dioxus::prelude::*;
use services::{ApiError, QuizServiceError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    Message(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::NotFound => "The requested quiz could not be found.",
            Self::Message(message) => message,
        }
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => Self::NotFound,
            other => Self::Message(other.user_message()),
        }
    }
}

impl From<QuizServiceError> for ViewError {
    fn from(err: QuizServiceError) -> Self {
        match err {
            QuizServiceError::Api(api) => api.into(),
            other => Self::Message(other.user_message()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
