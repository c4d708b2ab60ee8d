/// Verdict shown once the answer to a question is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The selected option matched the stored answer.
    Correct,
    /// An option was selected but did not match.
    Incorrect,
    /// The countdown ran out before any selection.
    TimeUp,
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Wrong answer!",
            Feedback::TimeUp => "Time's up!",
        }
    }
}
