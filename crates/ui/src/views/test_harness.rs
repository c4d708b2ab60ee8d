use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::Question;
use services::{InMemoryQuestionSource, QuestionService, QuestionSource, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    question_service: Arc<QuestionService>,
    quiz_settings: QuizSettings,
}

impl UiApp for TestApp {
    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving the dom until `window` has elapsed.
    pub async fn drive_for(&mut self, window: Duration) {
        let deadline = tokio::time::Instant::now() + window;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    /// Drive the dom until the rendered html contains `needle`, or give up.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..100 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn dispatch(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// The three-question set used across the view tests.
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("Q0", ["A", "B"], "A"),
        Question::new("Q1", ["C", "D"], "D"),
        Question::new("Q2", ["E", "F"], "E"),
    ]
}

/// Settings whose countdown never fires during a test.
pub fn frozen_clock() -> QuizSettings {
    QuizSettings {
        time_limit_secs: 10,
        tick_interval: Duration::from_secs(3600),
    }
}

pub fn setup_view_harness(questions: Vec<Question>, settings: QuizSettings) -> ViewHarness {
    setup_view_harness_with_source(Arc::new(InMemoryQuestionSource::new(questions)), settings)
}

pub fn setup_view_harness_with_source(
    source: Arc<dyn QuestionSource>,
    settings: QuizSettings,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        question_service: Arc::new(QuestionService::new(source)),
        quiz_settings: settings,
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
