use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{HistoryService, QuizBackend, QuizService};
use wikiquiz_core::model::{Question, Quiz};

use crate::context::{UiApp, build_app_context};
use crate::views::generate::GenerateTestHandles;
use crate::views::history::HistoryTestHandles;
use crate::views::quiz_panel::QuizPanelTestHandles;
use crate::views::{GenerateView, HistoryView, QuizDetailView, QuizPanel};

struct TestApp {
    quiz_service: Arc<QuizService>,
    history_service: Arc<HistoryService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn history_service(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Generate,
    History,
    QuizDetail(u64),
    /// A bare `QuizPanel` whose quiz the test can replace.
    SwappablePanel,
}

#[derive(Clone, Default)]
pub(crate) struct TestHandles {
    pub(crate) generate: GenerateTestHandles,
    pub(crate) history: HistoryTestHandles,
    pub(crate) panel: QuizPanelTestHandles,
    pub(crate) panel_quiz: PanelQuizHandle,
}

#[derive(Clone, Default)]
pub(crate) struct PanelQuizHandle {
    quiz: Rc<RefCell<Option<Signal<Arc<Quiz>>>>>,
}

impl PanelQuizHandle {
    fn register(&self, quiz: Signal<Arc<Quiz>>) {
        *self.quiz.borrow_mut() = Some(quiz);
    }

    fn signal(&self) -> Signal<Arc<Quiz>> {
        (*self.quiz.borrow()).expect("panel quiz registered")
    }
}

/// One-question quiz used by the swappable panel.
pub fn single_question_quiz(title: &str, question: &str, options: [&str; 2]) -> Quiz {
    Quiz::new(
        title,
        vec![Question::new(
            question,
            options.iter().map(|option| (*option).to_string()).collect(),
            options[0],
        )],
    )
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: TestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.generate.clone());
    use_context_provider(|| props.handles.history.clone());
    use_context_provider(|| props.handles.panel.clone());
    use_context_provider(|| props.handles.panel_quiz.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Generate => rsx! { GenerateView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::QuizDetail(id) => rsx! { QuizDetailView { id } },
        ViewKind::SwappablePanel => rsx! { SwappablePanel {} },
    }
}

#[component]
fn SwappablePanel() -> Element {
    let quiz = use_signal(|| {
        Arc::new(single_question_quiz(
            "First",
            "Which comes first?",
            ["one", "two"],
        ))
    });
    use_context::<PanelQuizHandle>().register(quiz);
    rsx! { QuizPanel { quiz: quiz() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub(crate) handles: TestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned tasks and resources finish, then re-render.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
        drive_dom(&mut self.dom);
    }

    /// Invoke a registered callback inside the runtime and settle.
    pub async fn call<T: 'static>(&mut self, callback: Callback<T>, value: T) {
        self.dom.in_runtime(|| callback.call(value));
        self.settle().await;
    }

    /// Hand the swappable panel a different quiz and settle.
    pub async fn replace_panel_quiz(&mut self, quiz: Quiz) {
        let mut signal = self.handles.panel_quiz.signal();
        self.dom.in_runtime(|| signal.set(Arc::new(quiz)));
        self.settle().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, backend: Arc<dyn QuizBackend>) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_service: Arc::new(QuizService::new(Arc::clone(&backend))),
        history_service: Arc::new(HistoryService::new(backend)),
    });
    let handles = TestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness.settle().await;
    harness
}
