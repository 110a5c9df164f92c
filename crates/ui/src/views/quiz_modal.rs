use std::sync::Arc;

use dioxus::prelude::*;
use wikiquiz_core::model::Quiz;

use crate::views::QuizPanel;

#[component]
pub fn QuizDetailModal(quiz: Arc<Quiz>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal__header",
                    div {
                        h2 { "{quiz.title}" }
                        p { class: "muted", "Quiz Details" }
                    }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal__body",
                    h3 { "Article Summary" }
                    p { "{quiz.summary}" }
                    QuizPanel { quiz: Arc::clone(&quiz) }
                }
            }
        }
    }
}
