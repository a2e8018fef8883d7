//! Runtime configuration, read from the environment at startup.
//!
//! A `.env` file in the working directory is honoured outside of tests.

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const API_URL_VAR: &str = "REVISION_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend base URL, without a trailing slash
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_values(std::env::var(API_URL_VAR).ok())
    }

    fn from_values(api_url: Option<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim().trim_end_matches('/').to_string();

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                API_URL_VAR.to_string(),
                format!("'{}' must start with http:// or https://", api_url),
            ));
        }

        Ok(Self { api_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = Config::from_values(None).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::from_values(Some("https://cards.example.com/api/".to_string())).unwrap();
        assert_eq!(config.api_url, "https://cards.example.com/api");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = Config::from_values(Some("localhost:8000".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue(var, _)) if var == "REVISION_API_URL"));
    }
}
