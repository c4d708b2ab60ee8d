#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use error::TransitionError;
pub use quiz::{QuizPhase, QuizSession, Round, TimerDirective};
pub use time::{Countdown, CountdownStep, DEFAULT_TICK_INTERVAL, DEFAULT_TIME_LIMIT_SECS};
