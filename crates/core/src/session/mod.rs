//! Interactive state over one rendered quiz.
//!
//! A `QuizSession` is created fresh for every view that displays a quiz and
//! dropped with it. Two views of the same quiz each own their own session.

mod classify;
mod score;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::TransitionError;
use crate::model::{Question, Quiz};

pub use classify::OptionState;
pub use score::Score;

use classify::OptionFacts;

/// Whether option buttons act as answer pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Browsing,
    Answering,
}

/// Coarse state of a session. `Graded` is answering mode with a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Browsing,
    Answering,
    Graded,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Arc<Quiz>,
    mode: SessionMode,
    answers: BTreeMap<usize, String>,
    revealed: bool,
    score: Option<Score>,
}

impl QuizSession {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            quiz,
            mode: SessionMode::Browsing,
            answers: BTreeMap::new(),
            revealed: false,
            score: None,
        }
    }

    //
    // ─── STATE ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.mode, self.score.is_some()) {
            (SessionMode::Browsing, _) => SessionPhase::Browsing,
            (SessionMode::Answering, false) => SessionPhase::Answering,
            (SessionMode::Answering, true) => SessionPhase::Graded,
        }
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Correctness feedback is visible: explicitly revealed or graded.
    #[must_use]
    pub fn show_correctness(&self) -> bool {
        self.revealed || self.score.is_some()
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    /// Option buttons accept picks: answering and not yet graded.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.mode == SessionMode::Answering && self.score.is_none()
    }

    /// `submit` would succeed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    //
    // ─── TRANSITIONS ──────────────────────────────────────────────────────────
    //

    /// Start a fresh attempt. Re-entering while answering resets progress.
    pub fn enter_answering_mode(&mut self) {
        self.mode = SessionMode::Answering;
        self.clear_attempt();
    }

    /// Leave answering mode, discarding answers, reveal and score.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotAnswering` while browsing.
    pub fn exit_answering_mode(&mut self) -> Result<(), TransitionError> {
        if self.mode != SessionMode::Answering {
            return Err(TransitionError::NotAnswering);
        }
        self.mode = SessionMode::Browsing;
        self.clear_attempt();
        Ok(())
    }

    /// Record (or replace) the pick for question `index`.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when not answering, already graded, the index
    /// is out of range, or `option` is not one of the question's options.
    pub fn select_answer(&mut self, index: usize, option: &str) -> Result<(), TransitionError> {
        if self.mode != SessionMode::Answering {
            return Err(TransitionError::NotAnswering);
        }
        if self.score.is_some() {
            return Err(TransitionError::AlreadyGraded);
        }
        let question = self.question_checked(index)?;
        if !question.has_option(option) {
            return Err(TransitionError::UnknownOption { index });
        }

        if self.answer(index) != Some(option) {
            self.answers.insert(index, option.to_string());
        }
        Ok(())
    }

    /// Grade the attempt and reveal correctness.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when not answering, already graded, some
    /// question is unanswered, or the quiz has no questions.
    pub fn submit(&mut self) -> Result<Score, TransitionError> {
        self.check_submit()?;
        let score = Score::grade(&self.quiz, &self.answers).ok_or(TransitionError::EmptyQuiz)?;
        self.score = Some(score);
        self.revealed = true;
        Ok(score)
    }

    /// Show correct answers without grading. Valid in any mode.
    pub fn reveal_answers(&mut self) {
        self.revealed = true;
    }

    //
    // ─── DERIVED VIEWS ────────────────────────────────────────────────────────
    //

    /// Display category of `option` within question `index`.
    ///
    /// Total: an unknown index or option classifies as not selected and not
    /// correct.
    #[must_use]
    pub fn classify(&self, index: usize, option: &str) -> OptionState {
        let is_correct_option = self
            .quiz
            .question(index)
            .is_some_and(|question| question.is_correct(option));

        OptionFacts {
            show_correctness: self.show_correctness(),
            answering: self.mode == SessionMode::Answering,
            is_selected: self.answer(index) == Some(option),
            is_correct_option,
        }
        .classify()
    }

    /// Explanation text for question `index`, only while correctness is shown.
    #[must_use]
    pub fn visible_explanation(&self, index: usize) -> Option<&str> {
        if !self.show_correctness() {
            return None;
        }
        self.quiz
            .question(index)
            .map(|question| question.explanation.as_str())
    }

    fn question_checked(&self, index: usize) -> Result<&Question, TransitionError> {
        self.quiz
            .question(index)
            .ok_or(TransitionError::QuestionOutOfRange {
                index,
                len: self.quiz.questions.len(),
            })
    }

    fn check_submit(&self) -> Result<(), TransitionError> {
        if self.mode != SessionMode::Answering {
            return Err(TransitionError::NotAnswering);
        }
        if self.score.is_some() {
            return Err(TransitionError::AlreadyGraded);
        }
        let total = self.quiz.questions.len();
        if total == 0 {
            return Err(TransitionError::EmptyQuiz);
        }
        if self.answers.len() < total {
            return Err(TransitionError::Incomplete {
                answered: self.answers.len(),
                total,
            });
        }
        Ok(())
    }

    fn clear_attempt(&mut self) {
        self.answers.clear();
        self.revealed = false;
        self.score = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
