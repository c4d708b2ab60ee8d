use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::time::{DEFAULT_TICK_INTERVAL, DEFAULT_TIME_LIMIT_SECS};
use url::Url;

use crate::question_source::{FileQuestionSource, HttpQuestionSource, QuestionSource};

/// Where the question list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionLocation {
    Path(PathBuf),
    Url(Url),
}

impl QuestionLocation {
    /// `http(s)://` becomes a URL, `file://` and anything else a filesystem path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_or_else(|()| Self::Path(PathBuf::from(trimmed)), Self::Path),
            _ => Self::Path(PathBuf::from(trimmed)),
        }
    }

    /// Build the matching question source.
    #[must_use]
    pub fn into_source(self) -> Arc<dyn QuestionSource> {
        match self {
            Self::Path(path) => Arc::new(FileQuestionSource::new(path)),
            Self::Url(url) => Arc::new(HttpQuestionSource::new(url)),
        }
    }
}

/// Timing knobs for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    pub time_limit_secs: u32,
    pub tick_interval: Duration,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Everything the composition root needs to assemble the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions: QuestionLocation,
    pub settings: QuizSettings,
}

impl QuizConfig {
    #[must_use]
    pub fn new(questions: QuestionLocation) -> Self {
        Self {
            questions,
            settings: QuizSettings::default(),
        }
    }

    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.settings.time_limit_secs = secs;
        self
    }
}
