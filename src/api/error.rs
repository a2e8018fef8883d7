//! Failure taxonomy shared by every backend call.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request went out but no response came back.
    #[error("No response from server")]
    Network,
    /// The backend answered 404.
    #[error("Resource not found")]
    NotFound,
    /// The backend answered with any other non-2xx status.
    #[error("Server responded with status {status}")]
    Server { status: u16 },
    /// The request could not be built, or the response could not be read
    /// as the expected JSON.
    #[error("{message}")]
    Client { message: String },
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Server { status } => Some(*status),
            ApiError::Network | ApiError::Client { .. } => None,
        }
    }

    /// Message shown in a view, e.g. `Failed to add question. No response from server.`
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            ApiError::NotFound | ApiError::Server { .. } => format!(
                "{} Server responded with status: {}",
                prefix,
                self.status().unwrap_or_default()
            ),
            ApiError::Network => format!("{} No response from server.", prefix),
            ApiError::Client { message } => format!("{} Error: {}", prefix, message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return ApiError::NotFound;
            }
            return ApiError::Server {
                status: status.as_u16(),
            };
        }
        if err.is_builder() || err.is_decode() {
            return ApiError::Client {
                message: err.to_string(),
            };
        }
        ApiError::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        assert_eq!(ApiError::Server { status: 500 }.status(), Some(500));
        assert_eq!(ApiError::Network.status(), None);
        assert_eq!(
            ApiError::Client {
                message: "bad".to_string()
            }
            .status(),
            None
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Server { status: 422 }.user_message("Failed to add question."),
            "Failed to add question. Server responded with status: 422"
        );
        assert_eq!(
            ApiError::NotFound.user_message("Failed to update schedule."),
            "Failed to update schedule. Server responded with status: 404"
        );
        assert_eq!(
            ApiError::Network.user_message("Failed to update schedule."),
            "Failed to update schedule. No response from server."
        );
        assert_eq!(
            ApiError::Client {
                message: "relative URL without a base".to_string()
            }
            .user_message("Failed to load questions."),
            "Failed to load questions. Error: relative URL without a base"
        );
    }
}
