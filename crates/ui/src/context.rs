use std::sync::Arc;

use services::{QuestionService, QuizSettings};

pub trait UiApp: Send + Sync {
    fn question_service(&self) -> Arc<QuestionService>;
    fn quiz_settings(&self) -> QuizSettings;
}

#[derive(Clone)]
pub struct AppContext {
    question_service: Arc<QuestionService>,
    quiz_settings: QuizSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_service: app.question_service(),
            quiz_settings: app.quiz_settings(),
        }
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    #[must_use]
    pub fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
