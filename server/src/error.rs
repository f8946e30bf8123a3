use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure in the underlying SQLite store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("inserted row {0} not found on read-back")]
    MissingRow(i64),
}

/// One rejected field of a create request
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid entry payload")]
    Validation(Vec<FieldError>),

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "validation failed", "fields": fields })),
            )
                .into_response(),
            ApiError::Storage(e) => {
                error!("storage failure: {e}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "storage failure" })),
                )
                    .into_response()
            }
        }
    }
}
