use std::sync::Arc;

use services::{HistoryService, QuizService};

/// Services the composition root hands to the views.
pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn history_service(&self) -> Arc<HistoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    history_service: Arc<HistoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
            history_service: app.history_service(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn history_service(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history_service)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
