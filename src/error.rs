use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::error::Error;
use std::fmt;

use crate::store::StoreError;
use crate::validator::ValidationError;

/// The primary error type for the application.
///
/// Every handler returns [`AppResult`], and the conversion into an HTTP response
/// happens exactly once, in [`IntoResponse`].
#[derive(Debug)]
pub enum AppError {
    /// For internal server errors that are not expected to be handled by the client.
    Internal(anyhow::Error),
    /// For client errors due to malformed requests (e.g. a body that is not JSON).
    BadRequest(String),
    /// For when a requested resource is not found.
    NotFound(String),
    /// For errors related to database operations, including constraint violations.
    Database(String),
    /// For when a request payload fails schema validation.
    Validation(ValidationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Validation(e) => write!(f, "Validation failed: {}", e),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Internal(e) => Some(e.as_ref()),
            AppError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message, error_id): (&str, Value, Option<String>) = match self {
            AppError::Internal(e) => {
                let error_id = uuid::Uuid::new_v4().to_string();
                tracing::error!(%error_id, "Internal error: {:?}", e);
                ("INTERNAL_ERROR", json!("An internal server error occurred"), Some(error_id))
            }
            AppError::Database(msg) => {
                let error_id = uuid::Uuid::new_v4().to_string();
                tracing::error!(%error_id, "Database error: {}", msg);
                ("DATABASE_ERROR", json!("A database error occurred"), Some(error_id))
            }
            AppError::BadRequest(msg) => ("BAD_REQUEST", json!(msg), None),
            AppError::NotFound(msg) => ("NOT_FOUND", json!(msg), None),
            AppError::Validation(ValidationError::Violations(msgs)) => ("VALIDATION_ERROR", json!(msgs), None),
            AppError::Validation(ValidationError::Forbidden(msg)) => ("VALIDATION_ERROR", json!(msg), None),
        };

        let mut body = json!({
            "error": {
                "code": error_code,
                "status": status.as_u16(),
            },
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if let Some(error_id) = error_id {
            body["error"]["error_id"] = json!(error_id);
        }

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(isbn) => AppError::NotFound(format!("No book with isbn of {}", isbn)),
            StoreError::Database(e) => e.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;
