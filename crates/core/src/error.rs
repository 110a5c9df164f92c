use thiserror::Error;

/// An operation was invoked outside the session state that allows it.
///
/// Rejected transitions never change session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("session is not in answering mode")]
    NotAnswering,

    #[error("session has already been graded")]
    AlreadyGraded,

    #[error("question index {index} is out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("option is not one of question {index}'s options")]
    UnknownOption { index: usize },

    #[error("only {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("quiz has no questions to grade")]
    EmptyQuiz,
}
