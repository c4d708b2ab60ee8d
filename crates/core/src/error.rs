use thiserror::Error;

/// Reasons a quiz event was ignored.
///
/// None of these are failures: the session is left untouched and the UI
/// treats the event as a no-op (e.g. a click on a disabled button).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("quiz has already started")]
    AlreadyStarted,

    #[error("no question is in progress")]
    NotInProgress,

    #[error("answer for this question is already revealed")]
    AlreadyRevealed,

    #[error("answer for this question is not revealed yet")]
    NotRevealed,

    #[error("countdown is not running")]
    NotTicking,

    #[error("quiz is not over")]
    NotOver,

    #[error("questions can only be loaded before the quiz runs")]
    QuestionsLocked,
}
