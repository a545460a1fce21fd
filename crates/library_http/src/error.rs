use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use library_core::db::DbError;
use library_core::{RepoError, ServiceError};
use serde_json::json;
use thiserror::Error;

/// Request-level failure, rendered as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Repository could not be built over the shared connection.
    #[error("storage unavailable: {0}")]
    Storage(#[from] RepoError),

    #[error("{0}")]
    BadRequest(String),

    #[error("database connection lock poisoned")]
    LockPoisoned,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::BookNotFound(_) | ServiceError::WriterNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Service(ServiceError::Validation(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::Repo(RepoError::ConstraintViolation(_))) => {
                StatusCode::CONFLICT
            }
            Self::Service(ServiceError::Repo(_)) | Self::Storage(_) | Self::LockPoisoned => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("event=request_failed module=http status=error error={self}");
            "internal error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Startup failure of the server binary.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
