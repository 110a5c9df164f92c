#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::TransitionError;
pub use session::{OptionState, QuizSession, Score, SessionMode, SessionPhase};
pub use time::Clock;
