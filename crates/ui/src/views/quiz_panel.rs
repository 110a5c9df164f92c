use std::sync::Arc;

use dioxus::prelude::*;
use wikiquiz_core::model::Quiz;

use crate::vm::{OptionVm, QuestionVm, QuizIntent, QuizSessionVm, ScoreVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Questions of one quiz with the take/submit/reveal controls.
///
/// Each mounted panel owns its own session. A different `quiz` prop starts
/// a fresh one.
#[component]
pub fn QuizPanel(quiz: Arc<Quiz>) -> Element {
    let mut vm = use_signal(|| QuizSessionVm::new(Arc::clone(&quiz)));

    use_effect(use_reactive!(|quiz| {
        if !vm.peek().shows(&quiz) {
            vm.set(QuizSessionVm::new(quiz));
        }
    }));

    let dispatch = use_callback(move |intent: QuizIntent| {
        if let Err(err) = vm.write().apply(intent) {
            log::debug!("quiz action ignored: {err}");
        }
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizPanelTestHandles>() {
            handles.register(dispatch);
        }
    }

    let panel = vm.read().panel();

    rsx! {
        section { class: "card quiz-panel",
            div { class: "quiz-panel__header",
                h2 { "Quiz Questions" }
                div { class: "quiz-panel__actions",
                    if panel.answering {
                        span { class: "quiz-panel__progress", "{panel.progress}" }
                    }
                    button {
                        r#type: "button",
                        class: panel.toggle_class,
                        onclick: move |_| dispatch.call(QuizIntent::ToggleMode),
                        "{panel.toggle_label}"
                    }
                    if panel.can_reveal {
                        button {
                            r#type: "button",
                            class: "btn btn--secondary",
                            onclick: move |_| dispatch.call(QuizIntent::RevealAnswers),
                            "Show Answers"
                        }
                    }
                    if panel.answering {
                        button {
                            r#type: "button",
                            class: "btn btn--submit",
                            disabled: !panel.can_submit,
                            onclick: move |_| dispatch.call(QuizIntent::Submit),
                            "Submit Quiz"
                        }
                    }
                }
            }

            if let Some(score) = panel.score {
                ScoreBanner { score }
            }

            div { class: "questions",
                for (index, question) in panel.questions.into_iter().enumerate() {
                    QuestionCard { key: "{index}", question, dispatch }
                }
            }
        }
    }
}

#[component]
fn ScoreBanner(score: ScoreVm) -> Element {
    rsx! {
        div { class: "score-banner",
            h3 { "Quiz Complete!" }
            p { "{score.text}" }
            div { class: "progress",
                div { class: "progress__bar", style: "width: {score.percentage}%" }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, dispatch: Callback<QuizIntent>) -> Element {
    let index = question.index;
    rsx! {
        div { class: "question",
            div { class: "question__header",
                h3 { class: "question__text", "{question.heading}" }
                span { class: question.difficulty.class, "{question.difficulty.label}" }
            }
            div { class: "question__options",
                for option in question.options {
                    OptionButton { question: index, option, dispatch }
                }
            }
            if let Some(explanation) = question.explanation {
                div { class: "explanation",
                    h4 { "Explanation:" }
                    p { "{explanation}" }
                }
            }
        }
    }
}

#[component]
fn OptionButton(question: usize, option: OptionVm, dispatch: Callback<QuizIntent>) -> Element {
    let text = option.text.clone();
    rsx! {
        button {
            r#type: "button",
            class: option.class,
            disabled: !option.enabled,
            onclick: move |_| {
                dispatch
                    .call(QuizIntent::Select {
                        question,
                        option: text.clone(),
                    })
            },
            span { class: "option__label", "{option.label}" }
            if let Some(marker) = option.marker {
                span { class: "option__marker", "{marker}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizPanelTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizPanelTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz panel dispatch registered")
    }
}
