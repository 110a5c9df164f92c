use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use wikiquiz_core::model::QuizId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{QuizPage, ViewError, ViewState, view_state_from_resource};

#[component]
pub fn QuizDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();

    let resource = use_resource(use_reactive!(|id| {
        let quiz_service = quiz_service.clone();
        async move {
            let quiz = quiz_service
                .open(QuizId::new(id))
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(Arc::new(quiz))
        }
    }));

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page quiz-detail",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Ready(quiz) => rsx! {
                    Link { class: "back-link", to: Route::History {}, "← Back to History" }
                    QuizPage { quiz }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "alert alert--error not-found",
                        h2 { "Quiz Not Found" }
                        p { "{err.message()}" }
                        Link { class: "btn btn--danger", to: Route::History {}, "Back to History" }
                    }
                },
            }
        }
    }
}
