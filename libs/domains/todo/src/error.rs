use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tonic::{Code, Status};
use uuid::Uuid;
use validator::ValidationErrors;

/// Error taxonomy shared by every layer above storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Upstream RPC server unreachable (gateway only)
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Storage or transport failure; the detail never leaves the process
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    pub fn item_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("todo item {id} not found"))
    }

    pub fn project_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("project {id} not found"))
    }

    pub fn item_exists(id: Uuid) -> Self {
        Self::AlreadyExists(format!("todo item {id} already exists"))
    }

    pub fn project_exists(id: Uuid) -> Self {
        Self::AlreadyExists(format!("project {id} already exists"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Storage errors are classified here and nowhere else.
impl From<DbErr> for TodoError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                return TodoError::AlreadyExists(format!("duplicate key: {detail}"));
            }
            // The only foreign key is todo_items.project_id
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return TodoError::NotFound("referenced project not found".to_string());
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(detail) => TodoError::NotFound(detail),
            DbErr::RecordNotUpdated => TodoError::NotFound("record not found".to_string()),
            other => TodoError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for TodoError {
    fn from(err: ValidationErrors) -> Self {
        TodoError::InvalidArgument(err.to_string())
    }
}

impl From<TodoError> for Status {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(msg) => Status::not_found(msg),
            TodoError::AlreadyExists(msg) => Status::already_exists(msg),
            TodoError::InvalidArgument(msg) => Status::invalid_argument(msg),
            TodoError::Unauthenticated(msg) => Status::unauthenticated(msg),
            TodoError::Unavailable(msg) => Status::unavailable(msg),
            TodoError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error while handling request");
                Status::internal("internal error")
            }
        }
    }
}

/// RPC status as seen by the gateway
impl From<Status> for TodoError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::NotFound => TodoError::NotFound(message),
            Code::AlreadyExists => TodoError::AlreadyExists(message),
            Code::InvalidArgument => TodoError::InvalidArgument(message),
            Code::Unauthenticated => TodoError::Unauthenticated(message),
            Code::Unavailable => TodoError::Unavailable(message),
            code => TodoError::Internal(format!("{code:?}: {message}")),
        }
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(msg) => AppError::NotFound(msg),
            TodoError::AlreadyExists(msg) => AppError::Conflict(msg),
            TodoError::InvalidArgument(msg) => AppError::BadRequest(msg),
            TodoError::Unauthenticated(msg) => AppError::Unauthorized(msg),
            TodoError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            TodoError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_record_not_found_is_not_found() {
        let err: TodoError = DbErr::RecordNotFound("todo_items".into()).into();
        assert!(err.is_not_found());
        assert!(TodoError::from(DbErr::RecordNotUpdated).is_not_found());
    }

    #[test]
    fn test_other_db_errors_are_internal() {
        let err: TodoError = DbErr::Custom("disk I/O error".into()).into();
        assert!(matches!(err, TodoError::Internal(ref detail) if detail.contains("disk I/O error")));
    }

    #[test]
    fn test_internal_detail_is_masked_on_the_wire() {
        let status: Status = TodoError::Internal("pool timed out on 10.0.0.3".into()).into();
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("10.0.0.3"));
    }

    #[test]
    fn test_status_mapping() {
        let id = Uuid::new_v4();
        let cases = [
            (
                TodoError::item_not_found(id),
                Code::NotFound,
                format!("todo item {id} not found"),
            ),
            (
                TodoError::project_exists(id),
                Code::AlreadyExists,
                format!("project {id} already exists"),
            ),
            (
                TodoError::InvalidArgument("id".into()),
                Code::InvalidArgument,
                "id".to_string(),
            ),
            (
                TodoError::Unauthenticated("token".into()),
                Code::Unauthenticated,
                "token".to_string(),
            ),
        ];
        // The status carries the payload without the display prefix, so the
        // gateway can rebuild the same error from it.
        for (err, code, message) in cases {
            let original = err.clone();
            let status = Status::from(err);
            assert_eq!(status.code(), code);
            assert_eq!(status.message(), message);
            assert_eq!(TodoError::from(status), original);
        }
    }

    #[test]
    fn test_status_round_trips_to_http() {
        let cases = [
            (Status::invalid_argument("bad id"), StatusCode::BAD_REQUEST),
            (Status::unauthenticated("no token"), StatusCode::UNAUTHORIZED),
            (Status::not_found("missing"), StatusCode::NOT_FOUND),
            (Status::already_exists("dup"), StatusCode::CONFLICT),
            (Status::unavailable("down"), StatusCode::SERVICE_UNAVAILABLE),
            (Status::data_loss("?"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (status, expected) in cases {
            let response = TodoError::from(status).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
