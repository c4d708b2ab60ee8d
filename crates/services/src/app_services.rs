use std::sync::Arc;

use crate::config::{QuizConfig, QuizSettings};
use crate::question_service::QuestionService;
use crate::question_source::QuestionSource;

/// Assembles app-facing services from the resolved configuration.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<QuestionService>,
    settings: QuizSettings,
}

impl AppServices {
    #[must_use]
    pub fn from_config(config: QuizConfig) -> Self {
        Self::new(config.questions.into_source(), config.settings)
    }

    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, settings: QuizSettings) -> Self {
        Self {
            questions: Arc::new(QuestionService::new(source)),
            settings,
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }
}
