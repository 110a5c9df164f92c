use std::collections::BTreeMap;

use crate::model::Quiz;

/// Result of grading a fully answered quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    total: u32,
    percentage: u32,
}

impl Score {
    /// Grade `answers` against `quiz`.
    ///
    /// Answers compare to `correct_option` by exact string equality. Returns
    /// `None` for a quiz without questions.
    #[must_use]
    pub fn grade(quiz: &Quiz, answers: &BTreeMap<usize, String>) -> Option<Self> {
        let total = quiz.questions.len();
        if total == 0 {
            return None;
        }
        let correct = quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                answers
                    .get(index)
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count();

        Some(Self::from_counts(
            u32::try_from(correct).unwrap_or(u32::MAX),
            u32::try_from(total).unwrap_or(u32::MAX),
        ))
    }

    /// Build a score from raw counts. `total` must be non-zero.
    #[must_use]
    pub fn from_counts(correct: u32, total: u32) -> Self {
        Self {
            correct,
            total,
            percentage: rounded_percentage(correct, total),
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }
}

/// `round(correct / total * 100)`, half up, on the exact quotient.
fn rounded_percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct);
    let total = u64::from(total);
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
