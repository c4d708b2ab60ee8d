use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::Question;
use services::{QuestionSource, QuestionSourceError, QuizSettings};

use super::test_harness::{
    frozen_clock, sample_questions, setup_view_harness, setup_view_harness_with_source,
};
use crate::vm::QuizIntent;

struct FailingQuestionSource;

#[async_trait::async_trait]
impl QuestionSource for FailingQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Err(QuestionSourceError::Io {
            path: PathBuf::from("questions.json"),
            source: std::io::Error::other("unreachable"),
        })
    }

    fn describe(&self) -> String {
        "failing source".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen() {
    let mut harness = setup_view_harness(sample_questions(), frozen_clock());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(!html.contains("quiz-timer"), "timer shown before start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_full_round() {
    let mut harness = setup_view_harness(sample_questions(), frozen_clock());
    harness.rebuild();

    harness.dispatch(QuizIntent::Start);
    let html = harness.drive_until("Question 1 / 3").await;
    assert!(html.contains("Question 1 / 3"), "first question missing in {html}");
    assert!(html.contains("Time left: 10 seconds"), "timer missing in {html}");
    assert!(!html.contains("Correct answer:"), "answer leaked before reveal in {html}");

    // Q0: correct.
    harness.dispatch(QuizIntent::Select("A".into()));
    let html = harness.render();
    assert!(html.contains("quiz-feedback--correct"), "missing correct feedback in {html}");
    assert!(html.contains("quiz-option--selected"), "selection not marked in {html}");
    assert!(html.contains("Correct answer:"), "answer not revealed in {html}");
    assert!(html.contains("Next question"), "missing next button in {html}");

    // A second pick after reveal is ignored.
    harness.dispatch(QuizIntent::Select("B".into()));
    assert!(harness.render().contains("quiz-feedback--correct"));

    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 / 3"), "did not advance in {html}");
    assert!(html.contains("Time left: 10 seconds"), "timer not reset in {html}");
    assert!(!html.contains("quiz-feedback"), "feedback not cleared in {html}");

    // Q1: wrong, Q2: right.
    harness.dispatch(QuizIntent::Select("C".into()));
    assert!(harness.render().contains("quiz-feedback--incorrect"));
    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Select("E".into()));
    harness.dispatch(QuizIntent::Advance);

    let html = harness.render();
    assert!(html.contains("Game over!"), "missing game over in {html}");
    assert!(html.contains("You got 2 of 3 right!"), "wrong score in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Start quiz"), "restart did not return to start in {html}");

    harness.dispatch(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("Question 1 / 3"), "questions not kept across restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_times_out() {
    let settings = QuizSettings {
        time_limit_secs: 2,
        tick_interval: Duration::from_millis(20),
    };
    let mut harness = setup_view_harness(sample_questions(), settings);
    harness.rebuild();

    harness.dispatch(QuizIntent::Start);
    let html = harness.drive_until("quiz-feedback--timeout").await;

    assert!(html.contains("quiz-feedback--timeout"), "no timeout in {html}");
    assert!(html.contains("Time left: 0 seconds"), "clock not at zero in {html}");
    assert!(html.contains("Correct answer:"), "answer not revealed in {html}");
    assert!(!html.contains("quiz-option--selected"), "unexpected selection in {html}");

    // Late clicks change nothing.
    harness.dispatch(QuizIntent::Select("A".into()));
    let html = harness.render();
    assert!(html.contains("quiz-feedback--timeout"), "timeout overwritten in {html}");

    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 / 3"), "did not advance in {html}");
    assert!(html.contains("Time left: 2 seconds"), "timer not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_runs_one_countdown_at_a_time() {
    let interval = Duration::from_millis(300);
    let settings = QuizSettings {
        time_limit_secs: 5,
        tick_interval: interval,
    };
    let mut harness = setup_view_harness(sample_questions(), settings);
    harness.rebuild();

    harness.dispatch(QuizIntent::Start);
    let html = harness.drive_until("Time left: 4 seconds").await;
    assert!(html.contains("Question 1 / 3"), "first question missing in {html}");
    assert!(html.contains("Time left: 4 seconds"), "first tick missing in {html}");

    // Answer and move on straight away, mid-interval of the first countdown.
    harness.dispatch(QuizIntent::Select("A".into()));
    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Question 2 / 3"), "did not advance in {html}");
    assert!(html.contains("Time left: 5 seconds"), "timer not reset in {html}");

    // One interval later the new question has lost exactly one second.
    let html = harness.drive_until("Time left: 4 seconds").await;
    assert!(html.contains("Time left: 4 seconds"), "second countdown stalled in {html}");
    harness.drive_for(interval / 3).await;
    let html = harness.render();
    assert!(html.contains("Time left: 4 seconds"), "stale countdown still ticking in {html}");

    // A revealed answer freezes the clock.
    harness.dispatch(QuizIntent::Select("D".into()));
    harness.drive_for(interval * 2).await;
    let html = harness.render();
    assert!(html.contains("Time left: 4 seconds"), "clock moved after reveal in {html}");
    assert!(html.contains("quiz-feedback--correct"), "missing feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_stays_loading_when_source_fails() {
    let mut harness =
        setup_view_harness_with_source(Arc::new(FailingQuestionSource), frozen_clock());
    harness.rebuild();

    harness.dispatch(QuizIntent::Start);
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing loading screen in {html}");
    assert!(!html.contains("Retry"), "failure surfaced to the player in {html}");
}
