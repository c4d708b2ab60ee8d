mod quiz_vm;

pub use quiz_vm::{
    FeedbackTone, FeedbackVm, OptionVm, QuestionVm, QuizIntent, QuizScreen, ScoreVm,
    format_time_left, map_quiz_screen,
};
