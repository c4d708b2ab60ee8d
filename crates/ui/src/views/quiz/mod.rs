mod countdown;
mod quiz;

pub use quiz::QuizView;

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
