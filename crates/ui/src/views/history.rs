use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use services::{filter_summaries, total_questions};
use wikiquiz_core::model::{HistoryStats, Quiz, QuizId, QuizSummary};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{QuizDetailModal, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    EmptyHistoryVm, HistoryCardVm, HistoryStatsVm, empty_history, map_history_cards,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    items: Vec<QuizSummary>,
    stats: Option<HistoryStats>,
}

#[derive(Clone, Debug, PartialEq)]
struct HistoryListing {
    stats: Option<HistoryStatsVm>,
    cards: Vec<HistoryCardVm>,
    empty: EmptyHistoryVm,
}

impl HistoryListing {
    fn new(data: &HistoryData, search: &str) -> Self {
        let visible = filter_summaries(&data.items, search);
        Self {
            stats: data
                .stats
                .map(|stats| HistoryStatsVm::new(stats, total_questions(&data.items))),
            cards: map_history_cards(&visible),
            empty: empty_history(search),
        }
    }
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.history_service();

    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<Arc<Quiz>>);
    let mut opening = use_signal(|| None::<QuizId>);
    let mut pending_delete = use_signal(|| None::<QuizId>);
    let mut action_error = use_signal(|| None::<String>);

    let resource = {
        let history = history.clone();
        use_resource(move || {
            let history = history.clone();
            async move {
                let items = history.recent().await.map_err(ViewError::from)?;
                let stats = match history.stats().await {
                    Ok(stats) => Some(stats),
                    Err(err) => {
                        log::warn!("history stats unavailable: {err}");
                        None
                    }
                };
                Ok::<_, ViewError>(HistoryData { items, stats })
            }
        })
    };

    let on_search = use_callback(move |value: String| search.set(value));

    let on_details = {
        let history = history.clone();
        use_callback(move |id: QuizId| {
            if opening.peek().is_some() {
                return;
            }
            opening.set(Some(id));
            action_error.set(None);
            let history = history.clone();
            spawn(async move {
                match history.detail(id).await {
                    Ok(quiz) => selected.set(Some(Arc::new(quiz))),
                    Err(err) => {
                        log::warn!("failed to open quiz {id}: {err}");
                        action_error.set(Some(ViewError::from(err).message().to_string()));
                    }
                }
                opening.set(None);
            });
        })
    };

    let on_request_delete = use_callback(move |id: QuizId| {
        action_error.set(None);
        pending_delete.set(Some(id));
    });

    let on_cancel_delete = use_callback(move |()| pending_delete.set(None));

    let on_confirm_delete = use_callback(move |id: QuizId| {
        if *pending_delete.peek() != Some(id) {
            return;
        }
        pending_delete.set(None);
        let history = history.clone();
        let mut resource = resource;
        spawn(async move {
            match history.delete(id).await {
                Ok(()) => resource.restart(),
                Err(err) => {
                    log::warn!("failed to delete quiz {id}: {err}");
                    action_error.set(Some("Failed to delete quiz".to_string()));
                }
            }
        });
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<HistoryTestHandles>() {
            handles.register(on_search, on_details, on_request_delete, on_confirm_delete);
        }
    }

    let state = view_state_from_resource(resource);
    let term = search();
    let listing = match &state {
        ViewState::Ready(data) => Some(HistoryListing::new(data, &term)),
        _ => None,
    };
    let opening_id = opening();
    let pending_id = pending_delete();

    rsx! {
        div { class: "page history",
            div { class: "page__header",
                div {
                    h1 { "Quiz History" }
                    p { class: "muted", "View and manage your previously generated quizzes" }
                }
                Link { class: "btn btn--primary", to: Route::Generate {}, "Generate New Quiz" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "alert alert--error",
                        p { "Failed to load quiz history" }
                        p { "{err.message()}" }
                        button {
                            r#type: "button",
                            class: "btn",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(_) => rsx! {},
            }

            if let Some(listing) = listing {
                if let Some(stats) = listing.stats {
                    div { class: "stats",
                        div { class: "stats__item",
                            div { class: "stats__value", "{stats.total_quizzes}" }
                            div { class: "stats__label", "Total Quizzes" }
                        }
                        div { class: "stats__item",
                            div { class: "stats__value", "{stats.this_week}" }
                            div { class: "stats__label", "This Week" }
                        }
                        div { class: "stats__item",
                            div { class: "stats__value", "{stats.total_questions}" }
                            div { class: "stats__label", "Total Questions" }
                        }
                    }
                }

                section { class: "card",
                    input {
                        r#type: "text",
                        class: "search",
                        placeholder: "Search quizzes by title or content...",
                        value: "{term}",
                        oninput: move |evt| on_search.call(evt.value()),
                    }
                }

                if let Some(message) = action_error() {
                    div { class: "alert alert--error", "{message}" }
                }

                if listing.cards.is_empty() {
                    div { class: "card empty",
                        h3 { "{listing.empty.heading}" }
                        p { "{listing.empty.hint}" }
                        if listing.empty.offer_generate {
                            Link { class: "btn btn--primary", to: Route::Generate {},
                                "Generate Your First Quiz"
                            }
                        }
                    }
                } else {
                    ul { class: "history-list",
                        for (id, card) in listing.cards.into_iter().map(|card| (card.id, card)) {
                            HistoryCard {
                                key: "{id}",
                                confirming: pending_id == Some(id),
                                opening: opening_id == Some(id),
                                card,
                                on_details,
                                on_request_delete,
                                on_confirm_delete,
                                on_cancel_delete,
                            }
                        }
                    }
                }
            }

            if let Some(quiz) = selected() {
                QuizDetailModal { quiz, on_close: move |()| selected.set(None) }
            }
        }
    }
}

#[component]
fn HistoryCard(
    card: HistoryCardVm,
    confirming: bool,
    opening: bool,
    on_details: EventHandler<QuizId>,
    on_request_delete: EventHandler<QuizId>,
    on_confirm_delete: EventHandler<QuizId>,
    on_cancel_delete: EventHandler<()>,
) -> Element {
    let id = card.id;
    rsx! {
        li { class: "card history-card",
            div { class: "history-card__body",
                h3 { "{card.title}" }
                p { class: "history-card__summary", "{card.summary}" }
                div { class: "history-card__meta",
                    span { "{card.created_at_str}" }
                    span { "{card.question_count_str}" }
                    a { href: "{card.url}", target: "_blank", rel: "noopener noreferrer", "View Article" }
                }
            }
            div { class: "history-card__actions",
                if confirming {
                    span { class: "history-card__confirm", "Delete this quiz?" }
                    button {
                        r#type: "button",
                        class: "btn btn--danger",
                        onclick: move |_| on_confirm_delete.call(id),
                        "Confirm Delete"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn--ghost",
                        onclick: move |_| on_cancel_delete.call(()),
                        "Cancel"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "btn btn--primary",
                        disabled: opening,
                        onclick: move |_| on_details.call(id),
                        if opening {
                            "Opening..."
                        } else {
                            "Details"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn--danger",
                        onclick: move |_| on_request_delete.call(id),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct HistoryTestHandles {
    search: Rc<RefCell<Option<Callback<String>>>>,
    details: Rc<RefCell<Option<Callback<QuizId>>>>,
    request_delete: Rc<RefCell<Option<Callback<QuizId>>>>,
    confirm_delete: Rc<RefCell<Option<Callback<QuizId>>>>,
}

#[cfg(test)]
impl HistoryTestHandles {
    pub(crate) fn register(
        &self,
        search: Callback<String>,
        details: Callback<QuizId>,
        request_delete: Callback<QuizId>,
        confirm_delete: Callback<QuizId>,
    ) {
        *self.search.borrow_mut() = Some(search);
        *self.details.borrow_mut() = Some(details);
        *self.request_delete.borrow_mut() = Some(request_delete);
        *self.confirm_delete.borrow_mut() = Some(confirm_delete);
    }

    pub(crate) fn search(&self) -> Callback<String> {
        (*self.search.borrow()).expect("search registered")
    }

    pub(crate) fn details(&self) -> Callback<QuizId> {
        (*self.details.borrow()).expect("details registered")
    }

    pub(crate) fn request_delete(&self) -> Callback<QuizId> {
        (*self.request_delete.borrow()).expect("request delete registered")
    }

    pub(crate) fn confirm_delete(&self) -> Callback<QuizId> {
        (*self.confirm_delete.borrow()).expect("confirm delete registered")
    }
}
