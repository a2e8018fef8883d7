//! Access to the question backend.
//!
//! Views talk to the backend only through [`QuestionsApi`], so they can be
//! driven by an in-memory fake in tests.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::models::{Interval, NewQuestion, Question, QuestionId};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionsApi: Send + Sync {
    /// All questions the backend currently offers for revision.
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// One question; `ApiError::NotFound` when the id is unknown.
    async fn get_question(&self, id: &QuestionId) -> Result<Question, ApiError>;

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError>;

    /// Records the interval chosen after a review. The backend derives the
    /// next revision date from it.
    async fn update_schedule(
        &self,
        id: &QuestionId,
        interval: Interval,
    ) -> Result<Question, ApiError>;

    async fn delete_question(&self, id: &QuestionId) -> Result<(), ApiError>;
}
