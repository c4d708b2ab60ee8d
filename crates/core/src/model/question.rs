use serde::{Deserialize, Serialize};

/// A single multiple-choice question as stored in the question list.
///
/// `answer` is expected to equal one of `options` verbatim. This is not
/// checked: a mismatch simply makes every selection count as incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Exact text comparison against the stored answer. No trimming or case folding.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}
