use std::sync::Arc;

use crate::error::TransitionError;
use crate::model::{Feedback, Question};
use crate::time::{Countdown, CountdownStep, DEFAULT_TIME_LIMIT_SECS};

//
// ─── TIMER DIRECTIVES ──────────────────────────────────────────────────────────
//

/// What the owner of the countdown task must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// Cancel any pending countdown task, then schedule a fresh one.
    Arm,
    /// Cancel any pending countdown task.
    Cancel,
    /// Leave the running countdown task alone.
    Keep,
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// State of the question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    index: usize,
    countdown: Countdown,
    selected: Option<String>,
    feedback: Option<Feedback>,
    correct: u32,
}

impl Round {
    fn first(time_limit: u32) -> Self {
        Self {
            index: 0,
            countdown: Countdown::new(time_limit),
            selected: None,
            feedback: None,
            correct: 0,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Once revealed, the question accepts no further selection until advanced.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.feedback.is_some()
    }
}

/// Which screen the quiz is on.
///
/// The tag makes contradictory combinations (e.g. "over" but "not started")
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    /// Started, but the question list has not arrived (or arrived empty).
    Loading,
    InProgress(Round),
    Over { correct: u32, total: usize },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The whole quiz: the loaded question list plus the current phase.
///
/// Every event method either applies its transition and returns the
/// [`TimerDirective`] to carry out, or returns a [`TransitionError`] and
/// leaves the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    time_limit: u32,
    phase: QuizPhase,
}

impl QuizSession {
    /// A limit of zero is raised to one second so every round can time out.
    #[must_use]
    pub fn new(time_limit: u32) -> Self {
        Self::with_questions(Vec::new(), time_limit)
    }

    /// Convenience for a session whose questions are already known.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>, time_limit: u32) -> Self {
        Self {
            questions: Arc::from(questions),
            time_limit: time_limit.max(1),
            phase: QuizPhase::NotStarted,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            QuizPhase::InProgress(round) => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.round()
            .and_then(|round| self.questions.get(round.index))
    }

    /// Correct answers so far (or final score once over).
    #[must_use]
    pub fn correct_count(&self) -> u32 {
        match &self.phase {
            QuizPhase::InProgress(round) => round.correct,
            QuizPhase::Over { correct, .. } => *correct,
            QuizPhase::NotStarted | QuizPhase::Loading => 0,
        }
    }

    /// True while a question is shown and its answer is not revealed yet.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.round().is_some_and(|round| !round.is_revealed())
    }

    /// Store the fetched question list.
    ///
    /// A session waiting in `Loading` moves straight to the first question
    /// when the list is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::QuestionsLocked` once a question has been shown.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<TimerDirective, TransitionError> {
        match self.phase {
            QuizPhase::NotStarted => {
                self.questions = Arc::from(questions);
                Ok(TimerDirective::Keep)
            }
            QuizPhase::Loading => {
                self.questions = Arc::from(questions);
                Ok(self.enter_first_question())
            }
            QuizPhase::InProgress(_) | QuizPhase::Over { .. } => {
                Err(TransitionError::QuestionsLocked)
            }
        }
    }

    /// Leave the start screen.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::AlreadyStarted` outside `NotStarted`.
    pub fn start(&mut self) -> Result<TimerDirective, TransitionError> {
        if !matches!(self.phase, QuizPhase::NotStarted) {
            return Err(TransitionError::AlreadyStarted);
        }
        self.phase = QuizPhase::Loading;
        Ok(self.enter_first_question())
    }

    /// Record the player's choice for the current question and reveal the answer.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotInProgress` when no question is shown and
    /// `TransitionError::AlreadyRevealed` after the answer was revealed.
    pub fn select(&mut self, answer: &str) -> Result<TimerDirective, TransitionError> {
        let QuizPhase::InProgress(round) = &mut self.phase else {
            return Err(TransitionError::NotInProgress);
        };
        if round.is_revealed() {
            return Err(TransitionError::AlreadyRevealed);
        }

        let is_correct = self
            .questions
            .get(round.index)
            .is_some_and(|question| question.is_correct(answer));

        round.selected = Some(answer.to_owned());
        if is_correct {
            round.correct = round.correct.saturating_add(1);
            round.feedback = Some(Feedback::Correct);
        } else {
            round.feedback = Some(Feedback::Incorrect);
        }
        Ok(TimerDirective::Cancel)
    }

    /// One second elapsed. Reveals the answer as "time's up" when the
    /// countdown reaches zero.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotTicking` unless an unrevealed question is shown.
    pub fn tick(&mut self) -> Result<TimerDirective, TransitionError> {
        let QuizPhase::InProgress(round) = &mut self.phase else {
            return Err(TransitionError::NotTicking);
        };
        if round.is_revealed() {
            return Err(TransitionError::NotTicking);
        }

        match round.countdown.tick() {
            CountdownStep::Running(_) => Ok(TimerDirective::Keep),
            CountdownStep::Expired => {
                round.feedback = Some(Feedback::TimeUp);
                Ok(TimerDirective::Cancel)
            }
        }
    }

    /// Move past a revealed question: to the next one, or to the score screen
    /// after the last.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotInProgress` when no question is shown and
    /// `TransitionError::NotRevealed` before the answer was revealed.
    pub fn advance(&mut self) -> Result<TimerDirective, TransitionError> {
        let total = self.questions.len();
        let QuizPhase::InProgress(round) = &mut self.phase else {
            return Err(TransitionError::NotInProgress);
        };
        if !round.is_revealed() {
            return Err(TransitionError::NotRevealed);
        }

        round.selected = None;
        round.feedback = None;
        round.countdown.reset();

        if round.index + 1 >= total {
            let correct = round.correct;
            self.phase = QuizPhase::Over { correct, total };
            return Ok(TimerDirective::Cancel);
        }

        round.index += 1;
        Ok(TimerDirective::Arm)
    }

    /// Back to the start screen with a clean score. The loaded questions stay.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotOver` outside the score screen.
    pub fn restart(&mut self) -> Result<TimerDirective, TransitionError> {
        if !matches!(self.phase, QuizPhase::Over { .. }) {
            return Err(TransitionError::NotOver);
        }
        self.phase = QuizPhase::NotStarted;
        Ok(TimerDirective::Cancel)
    }

    fn enter_first_question(&mut self) -> TimerDirective {
        if self.questions.is_empty() {
            return TimerDirective::Cancel;
        }
        self.phase = QuizPhase::InProgress(Round::first(self.time_limit));
        TimerDirective::Arm
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
