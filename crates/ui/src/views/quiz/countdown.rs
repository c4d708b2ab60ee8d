use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use quiz_core::{QuizSession, TimerDirective};

/// Holds the one outstanding countdown task.
///
/// Arming always cancels the previous task before spawning a new one. The
/// task belongs to the component scope, so unmounting the view drops it.
#[derive(Clone, Copy)]
pub(crate) struct CountdownSlot {
    task: Signal<Option<Task>>,
}

pub(crate) fn use_countdown_slot() -> CountdownSlot {
    CountdownSlot {
        task: use_signal(|| None),
    }
}

impl CountdownSlot {
    pub(crate) fn apply(
        mut self,
        directive: TimerDirective,
        session: Signal<QuizSession>,
        interval: Duration,
    ) {
        match directive {
            TimerDirective::Keep => {}
            TimerDirective::Cancel => self.cancel(),
            TimerDirective::Arm => {
                self.cancel();
                let task = spawn(run_countdown(session, interval));
                self.task.set(Some(task));
            }
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }
}

async fn run_countdown(mut session: Signal<QuizSession>, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        let step = session.write().tick();
        match step {
            Ok(TimerDirective::Keep) => {}
            Ok(_) => {
                tracing::debug!("countdown expired");
                break;
            }
            Err(err) => {
                tracing::debug!(%err, "countdown stopped");
                break;
            }
        }
    }
}
