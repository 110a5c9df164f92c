use std::sync::Arc;

use chrono::Duration;
use services::{ApiError, InMemoryBackend, QuizBackend};
use wikiquiz_core::model::{HistoryStats, Question, Quiz, QuizId, QuizSummary, UrlCheck};
use wikiquiz_core::time::{fixed_clock, fixed_now};

use super::test_harness::{ViewKind, setup_view_harness, single_question_quiz};
use crate::vm::QuizIntent;

const TURING: &str = "https://en.wikipedia.org/wiki/Alan_Turing";

fn stored_quiz(title: &str, summary: &str, days_ago: i64, questions: usize) -> Quiz {
    let mut quiz = Quiz::new(
        title,
        (0..questions)
            .map(|i| Question::new(format!("Question {i}?"), vec!["yes".into(), "no".into()], "yes"))
            .collect(),
    );
    quiz.summary = summary.to_string();
    quiz.url = format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"));
    quiz.created_at = Some(fixed_now() - Duration::days(days_ago));
    quiz
}

fn seeded_backend() -> (InMemoryBackend, Vec<QuizId>) {
    let backend = InMemoryBackend::new(fixed_clock());
    let ids = vec![
        backend
            .insert(stored_quiz("Photosynthesis", "Plants convert light", 10, 7))
            .unwrap(),
        backend
            .insert(stored_quiz("Renaissance", "European cultural movement", 1, 5))
            .unwrap(),
    ];
    (backend, ids)
}

struct FailingBackend;

#[async_trait::async_trait]
impl QuizBackend for FailingBackend {
    async fn generate_quiz(&self, _url: &str) -> Result<Quiz, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn validate_url(&self, _url: &str) -> Result<UrlCheck, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn get_quiz(&self, _id: QuizId) -> Result<Quiz, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn list_history(&self, _page: u32, _limit: u32) -> Result<Vec<QuizSummary>, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn get_history_detail(&self, _id: QuizId) -> Result<Quiz, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn delete_quiz(&self, _id: QuizId) -> Result<(), ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn stats(&self) -> Result<HistoryStats, ApiError> {
        Err(ApiError::Unavailable("connection refused".into()))
    }

    async fn health(&self) -> Result<bool, ApiError> {
        Ok(false)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_smoke_renders_form_and_examples() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let harness = setup_view_harness(ViewKind::Generate, backend).await;
    let html = harness.render();
    assert!(html.contains("Generate AI-Powered Quiz"), "missing title in {html}");
    assert!(html.contains("Try these examples:"), "missing examples in {html}");
    for title in ["Alan Turing", "Machine Learning", "Photosynthesis", "Renaissance"] {
        assert!(html.contains(title), "missing example {title} in {html}");
    }
    assert!(!html.contains("Valid Wikipedia URL detected"));
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_flags_non_article_urls() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let mut harness = setup_view_harness(ViewKind::Generate, backend).await;

    let url_input = harness.handles.generate.url_input();
    harness
        .call(url_input, "https://example.com/wiki/Alan_Turing".to_string())
        .await;
    let html = harness.render();
    assert!(
        html.contains("Please enter a valid Wikipedia article URL"),
        "missing hint in {html}"
    );
    assert!(html.contains("url-input--invalid"), "missing invalid style in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_view_flow_produces_playable_quiz() {
    let backend = InMemoryBackend::new(fixed_clock());
    let mut harness = setup_view_harness(ViewKind::Generate, Arc::new(backend.clone())).await;

    let url_input = harness.handles.generate.url_input();
    harness.call(url_input, TURING.to_string()).await;
    let html = harness.render();
    assert!(html.contains("Valid Wikipedia URL detected"), "missing valid hint in {html}");

    let generate = harness.handles.generate.generate();
    harness.call(generate, ()).await;
    let html = harness.render();
    assert!(html.contains("Generated from Wikipedia article"), "missing quiz page in {html}");
    assert!(html.contains("Article Summary"), "missing summary in {html}");
    assert!(html.contains("History of Alan Turing"), "missing related topic in {html}");
    assert!(html.contains("Take Quiz"), "missing toggle in {html}");
    assert!(html.contains("Show Answers"), "missing reveal in {html}");
    assert!(!html.contains("Explanation:"), "explanations leaked in {html}");

    let stored = backend.list_history(1, 10).await.unwrap();
    let quiz = backend.get_quiz(stored[0].id).await.unwrap();

    let dispatch = harness.handles.panel.dispatch();
    harness.call(dispatch, QuizIntent::ToggleMode).await;
    let html = harness.render();
    assert!(html.contains("Exit Quiz Mode"), "missing exit toggle in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");

    for (index, question) in quiz.questions.iter().enumerate() {
        let select = QuizIntent::Select {
            question: index,
            option: question.correct_option.clone(),
        };
        harness.call(dispatch, select).await;
    }
    harness.call(dispatch, QuizIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing banner in {html}");
    assert!(
        html.contains("You scored 3 out of 3 (100%)"),
        "missing score in {html}"
    );
    assert!(html.contains("Explanation:"), "missing explanations in {html}");
    assert!(html.contains("option--correct"), "missing correct styling in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_stats_and_cards() {
    let (backend, _ids) = seeded_backend();
    let harness = setup_view_harness(ViewKind::History, Arc::new(backend)).await;
    let html = harness.render();
    assert!(html.contains("Quiz History"), "missing title in {html}");
    assert!(html.contains("Total Quizzes"), "missing stats in {html}");
    assert!(html.contains("This Week"), "missing stats in {html}");
    assert!(html.contains("Total Questions"), "missing stats in {html}");
    assert!(html.contains("Photosynthesis"), "missing card in {html}");
    assert!(html.contains("5 questions"), "missing count in {html}");
    assert!(html.contains("View Article"), "missing article link in {html}");

    let renaissance = html.find("Renaissance").unwrap();
    let photosynthesis = html.find("Photosynthesis").unwrap();
    assert!(renaissance < photosynthesis, "history not newest first: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_search_filters_and_reports_no_match() {
    let (backend, _ids) = seeded_backend();
    let mut harness = setup_view_harness(ViewKind::History, Arc::new(backend)).await;
    let search = harness.handles.history.search();

    harness.call(search, "LIGHT".to_string()).await;
    let html = harness.render();
    assert!(html.contains("Photosynthesis"), "missing match in {html}");
    assert!(!html.contains("Renaissance"), "unfiltered row in {html}");

    harness.call(search, "quantum".to_string()).await;
    let html = harness.render();
    assert!(html.contains("No quizzes found"), "missing empty search state in {html}");
    assert!(!html.contains("Generate Your First Quiz"));
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_empty_store_invites_first_quiz() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let harness = setup_view_harness(ViewKind::History, backend).await;
    let html = harness.render();
    assert!(html.contains("No quizzes yet"), "missing empty state in {html}");
    assert!(html.contains("Generate Your First Quiz"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_delete_needs_confirmation() {
    let (backend, ids) = seeded_backend();
    let mut harness = setup_view_harness(ViewKind::History, Arc::new(backend.clone())).await;
    let renaissance = ids[1];

    let request = harness.handles.history.request_delete();
    harness.call(request, renaissance).await;
    let html = harness.render();
    assert!(html.contains("Delete this quiz?"), "missing confirmation in {html}");
    assert_eq!(backend.list_history(1, 10).await.unwrap().len(), 2);

    let confirm = harness.handles.history.confirm_delete();
    harness.call(confirm, renaissance).await;
    let html = harness.render();
    assert!(!html.contains("Renaissance"), "deleted row still shown in {html}");
    assert_eq!(backend.list_history(1, 10).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_details_open_modal_with_fresh_session() {
    let (backend, ids) = seeded_backend();
    let mut harness = setup_view_harness(ViewKind::History, Arc::new(backend)).await;

    let details = harness.handles.history.details();
    harness.call(details, ids[0]).await;
    let html = harness.render();
    assert!(html.contains("Quiz Details"), "missing modal in {html}");
    assert!(html.contains("1. Question 0?"), "missing questions in {html}");
    assert!(html.contains("Take Quiz"), "missing toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_error_state() {
    let harness = setup_view_harness(ViewKind::History, Arc::new(FailingBackend)).await;
    let html = harness.render();
    assert!(html.contains("Failed to load quiz history"), "missing error in {html}");
    assert!(html.contains("Network error"), "missing network message in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_detail_view_renders_stored_quiz() {
    let (backend, ids) = seeded_backend();
    let harness =
        setup_view_harness(ViewKind::QuizDetail(ids[1].value()), Arc::new(backend)).await;
    let html = harness.render();
    assert!(html.contains("Renaissance"), "missing title in {html}");
    assert!(html.contains("Back to History"), "missing back link in {html}");
    assert!(html.contains("Quiz Questions"), "missing panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_detail_view_reports_missing_quiz() {
    let backend = Arc::new(InMemoryBackend::new(fixed_clock()));
    let harness = setup_view_harness(ViewKind::QuizDetail(404), backend).await;
    let html = harness.render();
    assert!(html.contains("Quiz Not Found"), "missing not found in {html}");
    assert!(
        html.contains("The requested quiz could not be found."),
        "missing message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_panel_starts_fresh_session_for_replaced_quiz() {
    let backend = InMemoryBackend::new(fixed_clock());
    let mut harness = setup_view_harness(ViewKind::SwappablePanel, Arc::new(backend)).await;
    assert!(harness.render().contains("1. Which comes first?"));

    let dispatch = harness.handles.panel.dispatch();
    harness.call(dispatch, QuizIntent::ToggleMode).await;
    let select = QuizIntent::Select {
        question: 0,
        option: "one".into(),
    };
    harness.call(dispatch, select).await;
    harness.call(dispatch, QuizIntent::Submit).await;
    assert!(harness.render().contains("You scored 1 out of 1 (100%)"));

    harness
        .replace_panel_quiz(single_question_quiz(
            "Second",
            "Which comes second?",
            ["alpha", "beta"],
        ))
        .await;
    let html = harness.render();
    assert!(html.contains("1. Which comes second?"), "missing new quiz in {html}");
    assert!(!html.contains("Which comes first?"), "old quiz still shown in {html}");
    assert!(!html.contains("Quiz Complete!"), "old score carried over in {html}");
    assert!(html.contains("Take Quiz"), "session not reset in {html}");

    let dispatch = harness.handles.panel.dispatch();
    harness.call(dispatch, QuizIntent::ToggleMode).await;
    let select = QuizIntent::Select {
        question: 0,
        option: "beta".into(),
    };
    harness.call(dispatch, select).await;
    harness.call(dispatch, QuizIntent::Submit).await;
    let html = harness.render();
    assert!(
        html.contains("You scored 0 out of 1 (0%)"),
        "grading used the wrong quiz in {html}"
    );
}
