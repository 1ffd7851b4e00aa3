// error types for the strategy api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// request body is not json at all
    #[error("Request body is not valid JSON: {0}")]
    Parse(String),

    /// a field is missing or malformed
    #[error("Invalid field '{field}': {message}")]
    Validation { field: String, message: String },

    /// the model call failed or returned something we can't use
    #[error("Model generation failed: {0}")]
    Upstream(String),
}

impl StrategyError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        StrategyError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        StrategyError::Upstream(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            StrategyError::Parse(_) => StatusCode::BAD_REQUEST,
            StrategyError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            StrategyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            StrategyError::Parse(_) => "parse_error",
            StrategyError::Validation { .. } => "validation_error",
            StrategyError::Upstream(_) => "upstream_error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl IntoResponse for StrategyError {
    fn into_response(self) -> Response {
        let field = match &self {
            StrategyError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        let message = match &self {
            StrategyError::Parse(msg) | StrategyError::Upstream(msg) => msg.clone(),
            StrategyError::Validation { message, .. } => message.clone(),
        };
        let body = ErrorResponse {
            error: self.code().to_string(),
            field,
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}
