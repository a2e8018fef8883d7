pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod router;
pub mod task;
pub mod views;

pub use api::{ApiClient, ApiError, QuestionsApi};
pub use models::{Interval, NewQuestion, Question, QuestionId};
pub use router::Route;
