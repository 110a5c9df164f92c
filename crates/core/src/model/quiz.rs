use chrono::{DateTime, Utc};

use crate::model::ids::QuizId;

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty label attached to a generated question.
///
/// Labels the generator does not use map to `Unrated`, which renders with
/// neutral styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Unrated,
}

impl Difficulty {
    /// Parses a wire label. Matching is exact, as the generator emits
    /// lowercase labels.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unrated,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unrated => "unrated",
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// One multiple-choice item.
///
/// `correct_option` is expected to equal one entry of `options`. This is an
/// upstream contract and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl Question {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct_option: correct_option.into(),
            difficulty: Difficulty::Unrated,
            explanation: String::new(),
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}

/// Display label for the option at `index`: "A.", "B.", ...
///
/// Past "Z." the label continues with the following characters, which never
/// happens for generated quizzes (four options).
#[must_use]
pub fn option_label(index: usize) -> String {
    let letter = u32::try_from(index)
        .ok()
        .and_then(|offset| char::from_u32(u32::from(b'A') + offset))
        .unwrap_or('?');
    format!("{letter}.")
}

//
// ─── QUIZ ─────────────────────────────────────────────────────────────────────
//

/// Entities extracted from the source article, grouped by category.
///
/// Category order follows the backend payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A generated quiz with the article metadata it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: Option<QuizId>,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub key_entities: Vec<EntityGroup>,
    pub sections: Vec<String>,
    pub related_topics: Vec<String>,
    pub questions: Vec<Question>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    /// Minimal quiz with no article metadata beyond the title.
    #[must_use]
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: None,
            url: String::new(),
            title: title.into(),
            summary: String::new(),
            key_entities: Vec::new(),
            sections: Vec::new(),
            related_topics: Vec::new(),
            questions,
            created_at: None,
        }
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
