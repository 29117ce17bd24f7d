/// Error types for Blog Service
///
/// Domain-level failures are expected and non-fatal; each variant maps to a
/// structured HTTP response with a `detail` message. Store failures surface
/// as a generic server error and are never leaked to clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Referenced entity absent on a read or path-parameter dependency
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation detected before (or during) a write
    #[error("{0}")]
    Conflict(String),

    /// Create payload references a nonexistent foreign entity
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Malformed field content rejected at the boundary
    #[error("{0}")]
    Validation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnprocessableEntity(_) | AppError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

/// Returns the violated constraint name when `err` is a unique-index
/// violation (SQLSTATE 23505). Used to classify races that slip past the
/// service-layer pre-checks.
pub fn unique_violation_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            db.constraint().map(str::to_owned)
        }
        _ => None,
    }
}
