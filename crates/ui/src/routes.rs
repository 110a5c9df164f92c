use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GenerateView, HistoryView, QuizDetailView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", GenerateView)] Generate {},
        #[route("/history", HistoryView)] History {},
        #[route("/quiz/:id", QuizDetailView)] QuizDetail { id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Generate {},
                h1 { "AI Wiki Quiz" }
                span { class: "brand__tagline", "Learn from Wikipedia" }
            }
            nav { class: "nav",
                Link {
                    class: "nav__link",
                    active_class: "nav__link--active",
                    to: Route::Generate {},
                    "Generate Quiz"
                }
                Link {
                    class: "nav__link",
                    active_class: "nav__link--active",
                    to: Route::History {},
                    "Past Quizzes"
                }
            }
        }
    }
}
