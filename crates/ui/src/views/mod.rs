mod generate;
mod history;
mod quiz_detail;
mod quiz_modal;
mod quiz_page;
mod quiz_panel;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use generate::GenerateView;
pub use history::HistoryView;
pub use quiz_detail::QuizDetailView;
pub use quiz_modal::QuizDetailModal;
pub use quiz_page::QuizPage;
pub use quiz_panel::QuizPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
