use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use wikiquiz_core::Clock;
use wikiquiz_core::model::{
    Difficulty, EntityGroup, HistoryStats, Question, Quiz, QuizId, QuizSummary, UrlCheck,
    is_recent,
};

use super::{QuizBackend, clamp_page};
use crate::error::ApiError;

const SPECIAL_PAGE_MARKERS: [&str; 9] = [
    "Special:",
    "Talk:",
    "User:",
    "File:",
    "Category:",
    "Template:",
    "Help:",
    "Portal:",
    "Wikipedia:",
];

const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Same acceptance rule the backend applies to article URLs.
#[must_use]
pub fn is_wikipedia_article(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    let host = parsed.host_str().unwrap_or_default().to_lowercase();
    let is_wikipedia = host.ends_with(".wikipedia.org");
    let is_article = parsed.path().contains("/wiki/");
    let is_special = SPECIAL_PAGE_MARKERS.iter().any(|marker| raw.contains(marker));
    is_wikipedia && is_article && !is_special
}

#[derive(Default)]
struct State {
    quizzes: Vec<Quiz>,
    next_id: u64,
    offline: bool,
}

impl State {
    fn assign_id(&mut self, requested: Option<QuizId>) -> QuizId {
        match requested {
            Some(id) => {
                self.next_id = self.next_id.max(id.value());
                id
            }
            None => {
                self.next_id += 1;
                QuizId::new(self.next_id)
            }
        }
    }
}

/// Process-local `QuizBackend` with deterministic generation.
///
/// Generation derives a small quiz from the article slug. Records are kept in
/// insertion order and listed newest first.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
    clock: Clock,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            clock,
        }
    }

    /// Store `quiz` as-is, assigning an id and timestamp when missing.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unavailable` if the store lock is poisoned.
    pub fn insert(&self, mut quiz: Quiz) -> Result<QuizId, ApiError> {
        let mut state = self.lock()?;
        let id = state.assign_id(quiz.id);
        quiz.id = Some(id);
        quiz.created_at = quiz.created_at.or_else(|| Some(self.clock.now()));
        state.quizzes.push(quiz);
        Ok(id)
    }

    /// Make every call fail as if the backend were unreachable.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.offline = offline;
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        if guard.offline {
            return Err(ApiError::Unavailable("backend offline".into()));
        }
        Ok(guard)
    }

    fn find(&self, id: QuizId) -> Result<Quiz, ApiError> {
        let state = self.lock()?;
        state
            .quizzes
            .iter()
            .find(|quiz| quiz.id == Some(id))
            .cloned()
            .ok_or(ApiError::NotFound)
    }
}

#[async_trait]
impl QuizBackend for InMemoryBackend {
    async fn generate_quiz(&self, url: &str) -> Result<Quiz, ApiError> {
        if !is_wikipedia_article(url) {
            return Err(ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                detail: Some("Invalid Wikipedia URL".into()),
            });
        }
        let mut state = self.lock()?;
        if let Some(existing) = state.quizzes.iter().find(|quiz| quiz.url == url) {
            return Ok(existing.clone());
        }
        let mut quiz = generated_quiz(url);
        quiz.id = Some(state.assign_id(None));
        quiz.created_at = Some(self.clock.now());
        state.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn validate_url(&self, url: &str) -> Result<UrlCheck, ApiError> {
        let _state = self.lock()?;
        let valid = is_wikipedia_article(url);
        Ok(UrlCheck {
            valid,
            message: if valid {
                "Valid Wikipedia URL".into()
            } else {
                "Invalid Wikipedia URL".into()
            },
        })
    }

    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError> {
        self.find(id)
    }

    async fn list_history(&self, page: u32, limit: u32) -> Result<Vec<QuizSummary>, ApiError> {
        let (page, limit) = clamp_page(page, limit);
        let state = self.lock()?;
        let offset = usize::try_from(u64::from(page - 1) * u64::from(limit)).unwrap_or(usize::MAX);
        let now = self.clock.now();

        let mut newest_first: Vec<&Quiz> = state.quizzes.iter().rev().collect();
        newest_first.sort_by_key(|quiz| std::cmp::Reverse(quiz.created_at));

        Ok(newest_first
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .filter_map(|quiz| {
                Some(QuizSummary {
                    id: quiz.id?,
                    url: quiz.url.clone(),
                    title: quiz.title.clone(),
                    summary: preview(&quiz.summary),
                    created_at: quiz.created_at.unwrap_or(now),
                    question_count: u32::try_from(quiz.questions.len()).unwrap_or(u32::MAX),
                })
            })
            .collect())
    }

    async fn get_history_detail(&self, id: QuizId) -> Result<Quiz, ApiError> {
        self.find(id)
    }

    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        let before = state.quizzes.len();
        state.quizzes.retain(|quiz| quiz.id != Some(id));
        if state.quizzes.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn stats(&self) -> Result<HistoryStats, ApiError> {
        let state = self.lock()?;
        let now = self.clock.now();
        let recent = state
            .quizzes
            .iter()
            .filter(|quiz| quiz.created_at.is_some_and(|at| is_recent(at, now)))
            .count();
        Ok(HistoryStats {
            total_quizzes: u32::try_from(state.quizzes.len()).unwrap_or(u32::MAX),
            recent_quizzes: u32::try_from(recent).unwrap_or(u32::MAX),
        })
    }

    async fn health(&self) -> Result<bool, ApiError> {
        let _state = self.lock()?;
        Ok(true)
    }
}

fn preview(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_PREVIEW_CHARS {
        let head: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        summary.to_string()
    }
}

fn article_title(url: &str) -> String {
    let slug = url
        .rsplit("/wiki/")
        .next()
        .unwrap_or_default()
        .split(['#', '?'])
        .next()
        .unwrap_or_default();
    slug.replace('_', " ")
}

fn generated_quiz(url: &str) -> Quiz {
    let title = article_title(url);
    let options = |correct: &str, others: [&str; 3]| {
        let mut all = vec![correct.to_string()];
        all.extend(others.iter().map(|s| (*s).to_string()));
        all
    };

    let questions = vec![
        Question::new(
            "Which article was this quiz generated from?",
            options(&title, ["Photosynthesis", "Renaissance", "Machine learning"]),
            title.clone(),
        )
        .with_difficulty(Difficulty::Easy)
        .with_explanation(format!("The source article is \"{title}\".")),
        Question::new(
            "Which site hosts the source article?",
            options("Wikipedia", ["Britannica", "Wiktionary", "Project Gutenberg"]),
            "Wikipedia",
        )
        .with_difficulty(Difficulty::Medium)
        .with_explanation("Quizzes are generated from Wikipedia articles."),
        Question::new(
            "How many options does each question offer?",
            options("Four", ["Two", "Three", "Five"]),
            "Four",
        )
        .with_difficulty(Difficulty::Hard)
        .with_explanation("Every generated question has four options."),
    ];

    let mut quiz = Quiz::new(title.clone(), questions);
    quiz.url = url.to_string();
    quiz.summary = format!("{title} is the subject of this Wikipedia article.");
    quiz.key_entities = vec![
        EntityGroup {
            category: "people".into(),
            items: Vec::new(),
        },
        EntityGroup {
            category: "concepts".into(),
            items: vec![title.clone()],
        },
    ];
    quiz.related_topics = vec![format!("History of {title}")];
    quiz
}
