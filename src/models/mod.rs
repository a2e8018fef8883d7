pub mod interval;
pub mod question;

pub use interval::{Interval, InvalidInterval, REVIEW_INTERVALS};
pub use question::{NewQuestion, Question, QuestionId};
