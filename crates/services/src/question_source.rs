use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::Client;
use url::Url;

use crate::error::QuestionSourceError;

/// Read-only provider of the quiz question list.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full, ordered question list.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the list cannot be read or parsed.
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;

    /// Human-readable origin, used in diagnostics.
    fn describe(&self) -> String;
}

//
// ─── FILE ──────────────────────────────────────────────────────────────────────
//

/// Question list stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| QuestionSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

/// Question list served as a static JSON resource.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    url: Url,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

//
// ─── IN MEMORY ─────────────────────────────────────────────────────────────────
//

/// Fixed question list, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    questions: Vec<Question>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.questions.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory list of {}", self.questions.len())
    }
}
