//! HTTP implementation of [`QuestionsApi`] on top of reqwest.

use super::{ApiError, QuestionsApi};
use crate::models::question::{CreateQuestionBody, ScheduleUpdateBody};
use crate::models::{Interval, NewQuestion, Question, QuestionId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// JSON client for the questions backend
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/questions/", self.base_url)
    }

    fn question_url(&self, id: &QuestionId) -> String {
        format!(
            "{}/questions/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// Sends the request and maps any non-2xx status to an error.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            log::warn!("Request to {} failed: {}", self.base_url, err);
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        log::warn!("{} answered {}", response.url(), status);
        if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound)
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
            })
        }
    }

    /// A body cut off in transit is a network failure; a complete body that
    /// is not the expected JSON is a client failure. reqwest reports both
    /// as decode errors, so the body is read before it is parsed.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let url = response.url().clone();

        let body = response.bytes().await.map_err(|e| {
            log::warn!("Reading response from {} failed: {}", url, e);
            ApiError::Network
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("Unexpected response from {}: {}", url, e);
            ApiError::Client {
                message: format!("error decoding response body: {}", e),
            }
        })
    }
}

#[async_trait]
impl QuestionsApi for ApiClient {
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        self.send_json(self.client.get(&url)).await
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Question, ApiError> {
        let url = self.question_url(id);
        log::debug!("GET {}", url);
        self.send_json(self.client.get(&url)).await
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, ApiError> {
        let url = self.collection_url();
        let body = CreateQuestionBody::new(question, chrono::Utc::now());
        log::debug!("POST {}", url);
        self.send_json(self.client.post(&url).json(&body)).await
    }

    async fn update_schedule(
        &self,
        id: &QuestionId,
        interval: Interval,
    ) -> Result<Question, ApiError> {
        let url = self.question_url(id);
        let body = ScheduleUpdateBody {
            current_interval_days: interval.days(),
        };
        log::debug!("PUT {} ({} days)", url, interval.days());
        self.send_json(self.client.put(&url).json(&body)).await
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), ApiError> {
        let url = self.question_url(id);
        log::debug!("DELETE {}", url);
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}
