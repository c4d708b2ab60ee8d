use quiz_core::model::{Feedback, Question};
use quiz_core::{QuizPhase, QuizSession, TimerDirective, TransitionError};

/// Events the quiz view feeds into the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Advance,
    Restart,
    /// The one-shot question load finished.
    QuestionsLoaded(Vec<Question>),
}

impl QuizIntent {
    /// Apply this intent to the session.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when the session ignores the intent.
    pub fn apply(self, session: &mut QuizSession) -> Result<TimerDirective, TransitionError> {
        match self {
            QuizIntent::Start => session.start(),
            QuizIntent::Select(answer) => session.select(&answer),
            QuizIntent::Advance => session.advance(),
            QuizIntent::Restart => session.restart(),
            QuizIntent::QuestionsLoaded(questions) => session.load(questions),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
    Timeout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: &'static str,
    pub tone: FeedbackTone,
}

impl From<Feedback> for FeedbackVm {
    fn from(feedback: Feedback) -> Self {
        let tone = match feedback {
            Feedback::Correct => FeedbackTone::Correct,
            Feedback::Incorrect => FeedbackTone::Incorrect,
            Feedback::TimeUp => FeedbackTone::Timeout,
        };
        Self {
            message: feedback.message(),
            tone,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub time_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub revealed: bool,
    pub feedback: Option<FeedbackVm>,
    /// Only set once the answer is revealed.
    pub correct_answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub correct: u32,
    pub total: usize,
    pub label: String,
}

/// One variant per screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Loading,
    Question(QuestionVm),
    GameOver(ScoreVm),
}

#[must_use]
pub fn format_time_left(seconds: u32) -> String {
    if seconds == 1 {
        "Time left: 1 second".to_string()
    } else {
        format!("Time left: {seconds} seconds")
    }
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreen {
    match session.phase() {
        QuizPhase::NotStarted => QuizScreen::Start,
        QuizPhase::Loading => QuizScreen::Loading,
        QuizPhase::Over { correct, total } => QuizScreen::GameOver(ScoreVm {
            correct: *correct,
            total: *total,
            label: format!("You got {correct} of {total} right!"),
        }),
        QuizPhase::InProgress(round) => {
            let Some(question) = session.current_question() else {
                return QuizScreen::Loading;
            };
            let revealed = round.is_revealed();
            QuizScreen::Question(QuestionVm {
                progress_label: format!(
                    "Question {} / {}",
                    round.index() + 1,
                    session.questions().len()
                ),
                time_label: format_time_left(round.time_remaining()),
                prompt: question.question.clone(),
                options: question
                    .options
                    .iter()
                    .map(|option| OptionVm {
                        text: option.clone(),
                        selected: round.selected() == Some(option.as_str()),
                    })
                    .collect(),
                revealed,
                feedback: round.feedback().map(FeedbackVm::from),
                correct_answer: revealed.then(|| question.answer.clone()),
            })
        }
    }
}
