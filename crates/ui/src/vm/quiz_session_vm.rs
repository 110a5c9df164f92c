use std::sync::Arc;

use wikiquiz_core::model::{Difficulty, Quiz, option_label};
use wikiquiz_core::{OptionState, QuizSession, Score, SessionMode, TransitionError};

/// User actions on a quiz panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ToggleMode,
    Select { question: usize, option: String },
    Submit,
    RevealAnswers,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
    pub text: String,
}

impl From<Score> for ScoreVm {
    fn from(score: Score) -> Self {
        Self {
            correct: score.correct(),
            total: score.total(),
            percentage: score.percentage(),
            text: format!(
                "You scored {} out of {} ({}%)",
                score.correct(),
                score.total(),
                score.percentage()
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyBadgeVm {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<Difficulty> for DifficultyBadgeVm {
    fn from(difficulty: Difficulty) -> Self {
        let class = match difficulty {
            Difficulty::Easy => "badge badge--easy",
            Difficulty::Medium => "badge badge--medium",
            Difficulty::Hard => "badge badge--hard",
            Difficulty::Unrated => "badge",
        };
        Self {
            label: difficulty.as_str(),
            class,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    /// "A. Paris"
    pub label: String,
    pub state: OptionState,
    pub class: &'static str,
    pub enabled: bool,
    pub marker: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    /// "1. What is the capital of France?"
    pub heading: String,
    pub difficulty: DifficultyBadgeVm,
    pub options: Vec<OptionVm>,
    pub explanation: Option<String>,
}

/// Snapshot of everything a quiz panel renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPanelVm {
    pub answering: bool,
    pub toggle_label: &'static str,
    pub toggle_class: &'static str,
    pub can_reveal: bool,
    pub can_submit: bool,
    pub progress: String,
    pub score: Option<ScoreVm>,
    pub questions: Vec<QuestionVm>,
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Correct => "option option--correct",
        OptionState::IncorrectSelected => "option option--incorrect",
        OptionState::NeutralRevealed => "option option--neutral",
        OptionState::ActiveSelected => "option option--selected",
        OptionState::InteractiveUnselected => "option",
    }
}

fn option_marker(state: OptionState) -> Option<&'static str> {
    match state {
        OptionState::Correct => Some("✓"),
        OptionState::IncorrectSelected => Some("✗"),
        _ => None,
    }
}

/// Owns the session behind one rendered quiz.
#[derive(Clone, Debug)]
pub struct QuizSessionVm {
    session: QuizSession,
}

impl QuizSessionVm {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self {
            session: QuizSession::new(quiz),
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// True while this session belongs to `quiz` itself, not an equal copy.
    #[must_use]
    pub fn shows(&self, quiz: &Arc<Quiz>) -> bool {
        std::ptr::eq(self.session.quiz(), Arc::as_ptr(quiz))
    }

    /// # Errors
    ///
    /// Returns the `TransitionError` when the session rejects the action; the
    /// session is left unchanged.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), TransitionError> {
        match intent {
            QuizIntent::ToggleMode => match self.session.mode() {
                SessionMode::Browsing => {
                    self.session.enter_answering_mode();
                    Ok(())
                }
                SessionMode::Answering => self.session.exit_answering_mode(),
            },
            QuizIntent::Select { question, option } => {
                self.session.select_answer(question, &option)
            }
            QuizIntent::Submit => self.session.submit().map(|_| ()),
            QuizIntent::RevealAnswers => {
                self.session.reveal_answers();
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn panel(&self) -> QuizPanelVm {
        let session = &self.session;
        let answering = session.mode() == SessionMode::Answering;
        QuizPanelVm {
            answering,
            toggle_label: if answering { "Exit Quiz Mode" } else { "Take Quiz" },
            toggle_class: if answering {
                "btn btn--toggle btn--active"
            } else {
                "btn btn--toggle"
            },
            can_reveal: !answering && !session.revealed(),
            can_submit: session.can_submit(),
            progress: format!(
                "{} of {} answered",
                session.answered_count(),
                session.question_count()
            ),
            score: session.score().map(ScoreVm::from),
            questions: self.questions(),
        }
    }

    fn questions(&self) -> Vec<QuestionVm> {
        let session = &self.session;
        let pickable = session.accepts_answers() && !session.show_correctness();
        session
            .quiz()
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionVm {
                index,
                heading: format!("{}. {}", index + 1, question.text),
                difficulty: DifficultyBadgeVm::from(question.difficulty),
                options: question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(position, option)| {
                        let state = session.classify(index, option);
                        OptionVm {
                            text: option.clone(),
                            label: format!("{} {option}", option_label(position)),
                            state,
                            class: option_class(state),
                            enabled: pickable,
                            marker: option_marker(state),
                        }
                    })
                    .collect(),
                explanation: session.visible_explanation(index).map(str::to_string),
            })
            .collect()
    }
}
