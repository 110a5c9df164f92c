use std::sync::Arc;

use dioxus::prelude::*;
use wikiquiz_core::model::Quiz;

use crate::context::AppContext;
use crate::views::{QuizPage, ViewError};
use crate::vm::{
    EXAMPLE_ARTICLES, INVALID_URL_MESSAGE, UrlValidity, VALIDATION_FAILED_MESSAGE, can_generate,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GenerateView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();

    let mut url = use_signal(String::new);
    let mut validity = use_signal(UrlValidity::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut generated = use_signal(|| None::<Arc<Quiz>>);

    let on_url_change = {
        let quiz_service = quiz_service.clone();
        use_callback(move |value: String| {
            url.set(value.clone());
            error.set(None);
            generated.set(None);
            if value.trim().is_empty() {
                validity.set(UrlValidity::Unknown);
                return;
            }

            validity.set(UrlValidity::Checking);
            let quiz_service = quiz_service.clone();
            spawn(async move {
                let result = quiz_service.check_url(&value).await;
                // A newer edit supersedes this check.
                if *url.peek() != value {
                    return;
                }
                match result {
                    Ok(check) => {
                        let next = UrlValidity::from(&check);
                        validity.set(next);
                        if next == UrlValidity::Invalid {
                            error.set(Some(INVALID_URL_MESSAGE.to_string()));
                        }
                    }
                    Err(err) => {
                        log::warn!("url validation failed: {err}");
                        validity.set(UrlValidity::Invalid);
                        error.set(Some(VALIDATION_FAILED_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    let on_generate = use_callback(move |()| {
        let value = url();
        if !can_generate(&value, validity(), loading()) {
            return;
        }
        loading.set(true);
        error.set(None);
        generated.set(None);

        let quiz_service = quiz_service.clone();
        spawn(async move {
            match quiz_service.generate(&value).await {
                Ok(quiz) => generated.set(Some(Arc::new(quiz))),
                Err(err) => {
                    log::warn!("quiz generation failed: {err}");
                    error.set(Some(ViewError::from(err).message().to_string()));
                }
            }
            loading.set(false);
        });
    });

    let on_new_quiz = use_callback(move |()| {
        url.set(String::new());
        generated.set(None);
        error.set(None);
        validity.set(UrlValidity::Unknown);
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<GenerateTestHandles>() {
            handles.register(on_url_change, on_generate);
        }
    }

    if let Some(quiz) = generated() {
        return rsx! {
            QuizPage { quiz, on_new_quiz }
        };
    }

    let current_url = url();
    let current_validity = validity();
    let is_loading = loading();
    let enabled = can_generate(&current_url, current_validity, is_loading);

    rsx! {
        div { class: "page generate",
            div { class: "page__intro",
                h1 { "Generate AI-Powered Quiz" }
                p {
                    "Enter a Wikipedia article URL and let our AI generate a comprehensive quiz with questions, answers, and explanations."
                }
            }

            section { class: "card",
                label { r#for: "url", "Wikipedia Article URL" }
                div { class: "url-field",
                    input {
                        id: "url",
                        r#type: "url",
                        class: current_validity.input_class(),
                        placeholder: "https://en.wikipedia.org/wiki/Alan_Turing",
                        value: "{current_url}",
                        disabled: is_loading,
                        oninput: move |evt| on_url_change.call(evt.value()),
                    }
                    if current_validity == UrlValidity::Checking {
                        span { class: "url-field__status", "Checking..." }
                    }
                }
                if let Some(hint) = current_validity.hint() {
                    p { class: "url-hint", "{hint}" }
                }
                if let Some(message) = error() {
                    div { class: "alert alert--error", "{message}" }
                }
                button {
                    r#type: "button",
                    class: "btn btn--primary btn--wide",
                    disabled: !enabled,
                    onclick: move |_| on_generate.call(()),
                    if is_loading {
                        "Generating Quiz..."
                    } else {
                        "Generate Quiz"
                    }
                }
            }

            section { class: "card",
                h3 { "Try these examples:" }
                div { class: "examples",
                    for example in EXAMPLE_ARTICLES {
                        button {
                            key: "{example.url}",
                            r#type: "button",
                            class: "example",
                            disabled: is_loading,
                            onclick: move |_| on_url_change.call(example.url.to_string()),
                            h4 { "{example.title}" }
                            p { "{example.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GenerateTestHandles {
    url_input: Rc<RefCell<Option<Callback<String>>>>,
    generate: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl GenerateTestHandles {
    pub(crate) fn register(&self, url_input: Callback<String>, generate: Callback<()>) {
        *self.url_input.borrow_mut() = Some(url_input);
        *self.generate.borrow_mut() = Some(generate);
    }

    pub(crate) fn url_input(&self) -> Callback<String> {
        (*self.url_input.borrow()).expect("url input registered")
    }

    pub(crate) fn generate(&self) -> Callback<()> {
        (*self.generate.borrow()).expect("generate registered")
    }
}
