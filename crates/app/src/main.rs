use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuestionLocation, QuestionService, QuizConfig, QuizSettings};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeLimit { origin: &'static str, raw: String },
    InvalidQuestions { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeLimit { origin, raw } => {
                write!(f, "invalid {origin} value: {raw:?} (expected whole seconds > 0)")
            }
            ArgsError::InvalidQuestions { raw } => write!(f, "invalid --questions value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_time_limit(origin: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ArgsError::InvalidTimeLimit {
            origin,
            raw: raw.to_string(),
        })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn question_service(&self) -> Arc<QuestionService> {
        self.services.questions()
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.services.settings()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path|url>] [--time-limit <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {}", default_questions_path().display());
    eprintln!("  --time-limit 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_TIME_LIMIT, RUST_LOG");
}

fn default_questions_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/questions.json"))
}

struct Args {
    questions: QuestionLocation,
    time_limit: Option<u32>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || QuestionLocation::Path(default_questions_path()),
                |value| QuestionLocation::parse(&value),
            );
        let mut time_limit = env("QUIZ_TIME_LIMIT")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_time_limit("QUIZ_TIME_LIMIT", &value))
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestions { raw: value });
                    }
                    questions = QuestionLocation::parse(&value);
                }
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    time_limit = Some(parse_time_limit("--time-limit", &value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            time_limit,
        })
    }

    fn into_config(self) -> QuizConfig {
        let config = QuizConfig::new(self.questions);
        match self.time_limit {
            Some(secs) => config.with_time_limit(secs),
            None => config,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn launch(config: QuizConfig) {
    tracing::info!(
        questions = ?config.questions,
        time_limit_secs = config.settings.time_limit_secs,
        "starting quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::from_config(config),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[tokio::main]
async fn main() {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let config = match Args::parse(&mut argv) {
        Ok(args) => args.into_config(),
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    launch(config);
}
