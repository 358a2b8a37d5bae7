use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Domain errors raised by the todo item service.
///
/// The messages carried by `Validation` and `NotFound` surface verbatim in
/// HTTP error bodies and are part of the API contract.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Caller supplied invalid or conflicting data
    #[error("{0}")]
    Validation(String),

    /// Referenced identifier does not exist
    #[error("{0}")]
    NotFound(String),

    /// The row was concurrently modified or removed since it was last read
    #[error("Concurrent update detected for item {0}")]
    Conflict(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Boundary classification: domain error → HTTP status.
///
/// Validation is client-fixable (400), NotFound maps to 404, and anything
/// else — including an unresolved concurrency conflict — is unclassified
/// and surfaces as 500. Retrying a conflict is the caller's business.
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(msg) => AppError::BadRequest(msg),
            TodoError::NotFound(msg) => AppError::NotFound(msg),
            TodoError::Conflict(id) => AppError::InternalServerError(format!(
                "Concurrent update detected for item {}",
                id
            )),
            TodoError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TodoError {
    fn from(err: sea_orm::DbErr) -> Self {
        TodoError::Database(err.to_string())
    }
}
