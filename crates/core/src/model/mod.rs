mod feedback;
mod question;

pub use feedback::Feedback;
pub use question::Question;
