use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy shared by every handler.
///
/// Each variant maps to one of the five response shapes the API emits:
/// 401, 403, 404, 400 and 500. Database and storage failures carry the
/// underlying message in the `details` field for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Authentication required".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, details) = match self {
            ApiError::Database(e) => ("Internal server error".to_string(), Some(e.to_string())),
            ApiError::Storage(e) => ("Internal server error".to_string(), Some(e.to_string())),
            other => (other.to_string(), None),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": error,
            "details": details,
        }))
    }
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ApiError::Validation(format!("Invalid multipart payload: {e}"))
    }
}

/// Map a unique-key violation to a contextual validation error, and pass
/// every other database failure through unchanged.
pub fn map_unique(e: DbErr, message: &str) -> ApiError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::Validation(message.to_string()),
        _ => ApiError::Database(e),
    }
}

/// 200 envelope with the default message.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    ok_message(data, "Success")
}

/// 200 envelope: `{"success": true, "message": ..., "data": ...}`.
pub fn ok_message<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message,
        "data": data,
    }))
}
