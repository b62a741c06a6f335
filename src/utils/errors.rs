use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single invalid query parameter, reported back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct QueryIssue {
    pub field: String,
    pub message: String,
}

impl QueryIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("server not found")]
    RecordNotFound,

    #[error("server name is required")]
    MissingName,

    #[error("invalid query parameters")]
    InvalidQuery(Vec<QueryIssue>),

    #[error("invalid badge path: {0}")]
    BadgePath(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("internal error: {0}")]
    InternalError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<anyhow::Error> for CatalogError {
    fn from(e: anyhow::Error) -> Self {
        CatalogError::InternalError(e.to_string())
    }
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::MissingName | Self::InvalidQuery(_) | Self::BadgePath(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RecordNotFound => "NOT_FOUND",
            Self::MissingName => "MISSING_NAME",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::BadgePath(_) => "INVALID_BADGE_PATH",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Badge errors answer in plain text so broken embeds stay readable.
            Self::BadgePath(message) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
            Self::RecordNotFound => {
                (status, Json(json!({ "error": "Server not found" }))).into_response()
            }
            Self::MissingName => {
                (status, Json(json!({ "error": "Server name is required" }))).into_response()
            }
            Self::InvalidQuery(issues) => (
                status,
                Json(json!({
                    "error": "Invalid query parameters",
                    "details": issues,
                })),
            )
                .into_response(),
            other => {
                // Internal details stay server-side.
                tracing::error!("request failed: {}", other);
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
