use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::error;

use backend_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    /// `context` fields are flattened next to `message`.
    NotFound {
        message: String,
        context: Map<String, Value>,
    },
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match value {
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            AppError::NotFound { message, context } => HttpError::NotFound { message, context },
            AppError::Internal(err) => HttpError::Internal(format!("{:#}", err)),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid request", "details": details })),
            )
                .into_response(),
            HttpError::NotFound {
                message,
                mut context,
            } => {
                context.insert("message".to_string(), Value::String(message));
                (StatusCode::NOT_FOUND, Json(Value::Object(context))).into_response()
            }
            HttpError::Internal(details) => {
                error!("request failed: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error", "details": details })),
                )
                    .into_response()
            }
        }
    }
}
