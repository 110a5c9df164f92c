mod history;
mod ids;
mod quiz;

pub use ids::QuizId;

pub use history::{HistoryStats, QuizSummary, RECENT_WINDOW_DAYS, UrlCheck, is_recent};
pub use quiz::{Difficulty, EntityGroup, Question, Quiz, option_label};
