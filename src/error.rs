//! Error types for the Search4Faces client.

use serde_json::Value;
use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur when talking to the Search4Faces API
#[derive(Debug, Error)]
pub enum SearchError {
    /// The API answered with an `error` object.
    #[error("[{code}] API Exception: {message}")]
    Api { code: String, message: String },

    /// Network failure, timeout or a body that is not valid JSON.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("No face detected in the supplied image")]
    NoFaceDetected,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid profile at index {index}: {source}")]
    InvalidProfile {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// Build an API error from the upstream `error` value.
    ///
    /// The code may be numeric or a string; both are rendered without quotes.
    pub fn from_rpc_error(error: &Value) -> Self {
        let code = match error.get("code") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "unknown".to_string(),
            Some(other) => other.to_string(),
        };

        let message = match error.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        };

        Self::Api { code, message }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Upstream error code, if this is an API error.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SearchError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
