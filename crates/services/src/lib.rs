#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod question_service;
pub mod question_source;

pub use app_services::AppServices;
pub use config::{QuestionLocation, QuizConfig, QuizSettings};
pub use error::QuestionSourceError;
pub use question_service::QuestionService;
pub use question_source::{
    FileQuestionSource, HttpQuestionSource, InMemoryQuestionSource, QuestionSource,
};
