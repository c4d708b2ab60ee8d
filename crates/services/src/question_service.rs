use std::sync::Arc;

use quiz_core::model::Question;

use crate::error::QuestionSourceError;
use crate::question_source::QuestionSource;

/// Loads the question list once and reports the outcome on the log.
///
/// There is no retry: the UI keeps showing its loading screen when the
/// load fails, so the log is the only place the failure shows up.
#[derive(Clone)]
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch the question list.
    ///
    /// # Errors
    ///
    /// Returns the `QuestionSourceError` from the underlying source, after logging it.
    pub async fn load(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let origin = self.source.describe();
        match self.source.fetch_questions().await {
            Ok(questions) => {
                tracing::info!(%origin, count = questions.len(), "loaded questions");
                if questions.is_empty() {
                    tracing::warn!(%origin, "question list is empty");
                }
                Ok(questions)
            }
            Err(err) => {
                tracing::error!(%origin, error = %err, "failed to load questions");
                Err(err)
            }
        }
    }
}
