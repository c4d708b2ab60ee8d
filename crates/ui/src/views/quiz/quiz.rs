use dioxus::prelude::*;
use quiz_core::QuizSession;

use crate::context::AppContext;
use crate::vm::{FeedbackTone, QuestionVm, QuizIntent, QuizScreen, ScoreVm, map_quiz_screen};
use super::countdown::use_countdown_slot;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.quiz_settings();
    let question_service = ctx.question_service();

    let session = use_signal(|| QuizSession::new(settings.time_limit_secs));
    let countdown = use_countdown_slot();

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let result = intent.apply(&mut session.write());
        match result {
            Ok(directive) => countdown.apply(directive, session, settings.tick_interval),
            Err(err) => tracing::debug!(%err, "ignored quiz intent"),
        }
    });

    // One load on mount, never retried. Failures are logged by the service
    // and leave the quiz on its loading screen.
    use_hook(move || {
        spawn(async move {
            if let Ok(questions) = question_service.load().await {
                dispatch_intent.call(QuizIntent::QuestionsLoaded(questions));
            }
        })
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let screen = map_quiz_screen(&session.read());

    rsx! {
        div { class: "page quiz-page",
            h1 { class: "quiz-title", "Quiz" }
            match screen {
                QuizScreen::Start => rsx! {
                    button {
                        class: "quiz-start",
                        id: "quiz-start",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                        "Start quiz"
                    }
                },
                QuizScreen::Loading => rsx! {
                    p { class: "quiz-loading", "Loading questions..." }
                },
                QuizScreen::Question(question) => rsx! {
                    QuestionCard { question: question, on_intent: dispatch_intent }
                },
                QuizScreen::GameOver(score) => rsx! {
                    ScoreCard { score: score, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let feedback = question.feedback.map(|feedback| {
        let class = match feedback.tone {
            FeedbackTone::Correct => "quiz-feedback quiz-feedback--correct",
            FeedbackTone::Incorrect => "quiz-feedback quiz-feedback--incorrect",
            FeedbackTone::Timeout => "quiz-feedback quiz-feedback--timeout",
        };
        (class, feedback.message)
    });

    rsx! {
        div { class: "quiz-card",
            p { class: "quiz-progress", "{question.progress_label}" }
            p { class: "quiz-timer", id: "quiz-timer", "{question.time_label}" }
            h2 { class: "quiz-question", "{question.prompt}" }
            div { class: "quiz-options",
                for (idx, option) in question.options.iter().enumerate() {
                    OptionButton {
                        key: "{idx}",
                        text: option.text.clone(),
                        selected: option.selected,
                        disabled: question.revealed,
                        on_intent: on_intent,
                    }
                }
            }
            if let Some((class, message)) = feedback {
                p { class: "{class}", "{message}" }
            }
            if let Some(answer) = question.correct_answer.clone() {
                div { class: "quiz-reveal",
                    p { class: "quiz-answer",
                        "Correct answer: "
                        strong { "{answer}" }
                    }
                    button {
                        class: "quiz-next",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Advance),
                        "Next question"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    text: String,
    selected: bool,
    disabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let choice = text.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(choice.clone())),
            "{text}"
        }
    }
}

#[component]
fn ScoreCard(score: ScoreVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-card quiz-over",
            h2 { "Game over!" }
            p { class: "quiz-score", "{score.label}" }
            button {
                class: "quiz-restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Play again"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
