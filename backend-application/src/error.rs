use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// `context` is echoed next to `message` in the response body.
    #[error("{message}")]
    NotFound {
        message: String,
        context: Map<String, Value>,
    },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
            context: Map::new(),
        }
    }

    pub fn not_found_with(
        message: impl Into<String>,
        key: &str,
        value: impl Into<Value>,
    ) -> Self {
        let mut context = Map::new();
        context.insert(key.to_string(), value.into());
        AppError::NotFound {
            message: message.into(),
            context,
        }
    }
}
