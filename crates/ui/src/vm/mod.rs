mod generate_vm;
mod history_vm;
mod quiz_page_vm;
mod quiz_session_vm;
mod time_fmt;

pub use generate_vm::{
    EXAMPLE_ARTICLES, ExampleArticle, INVALID_URL_MESSAGE, UrlValidity, VALIDATION_FAILED_MESSAGE,
    can_generate,
};
pub use history_vm::{
    EmptyHistoryVm, HistoryCardVm, HistoryStatsVm, empty_history, map_history_cards,
};
pub use quiz_page_vm::{ENTITY_PREVIEW_LIMIT, EntityPreviewVm, entity_previews};
pub use quiz_session_vm::{
    DifficultyBadgeVm, OptionVm, QuestionVm, QuizIntent, QuizPanelVm, QuizSessionVm, ScoreVm,
};
pub use time_fmt::{format_datetime, format_datetime_in};
