use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use wikiquiz_core::model::Quiz;

use crate::routes::Route;
use crate::views::QuizPanel;
use crate::vm::{EntityPreviewVm, entity_previews};

/// Full quiz page: article metadata around a `QuizPanel`.
#[component]
pub fn QuizPage(quiz: Arc<Quiz>, on_new_quiz: Option<EventHandler<()>>) -> Element {
    let entities = entity_previews(&quiz);

    rsx! {
        div { class: "quiz-page",
            div { class: "quiz-page__header",
                div {
                    h1 { "{quiz.title}" }
                    p { class: "muted", "Generated from Wikipedia article" }
                }
                div { class: "quiz-page__actions",
                    if let Some(on_new_quiz) = on_new_quiz {
                        button {
                            r#type: "button",
                            class: "btn btn--ghost",
                            onclick: move |_| on_new_quiz.call(()),
                            "New Quiz"
                        }
                    }
                    Link { class: "btn btn--primary", to: Route::History {}, "View History" }
                }
            }

            section { class: "card",
                h2 { "Article Summary" }
                p { "{quiz.summary}" }
            }

            if !entities.is_empty() {
                section { class: "card",
                    h2 { "Key Information" }
                    div { class: "entities",
                        for (position, entity) in entities.into_iter().enumerate() {
                            EntityColumn { key: "{position}", entity }
                        }
                    }
                }
            }

            QuizPanel { quiz: Arc::clone(&quiz) }

            if !quiz.related_topics.is_empty() {
                section { class: "card",
                    h2 { "Related Topics" }
                    div { class: "topics",
                        for topic in quiz.related_topics.iter() {
                            span { class: "topic", "{topic}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntityColumn(entity: EntityPreviewVm) -> Element {
    rsx! {
        div { class: "entities__group",
            h3 { class: "entities__category", "{entity.category}" }
            for item in entity.shown {
                div { class: "entities__item", "{item}" }
            }
            if let Some(more) = entity.more {
                div { class: "entities__more", "{more}" }
            }
        }
    }
}
