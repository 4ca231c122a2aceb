use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::Validation(field_errors) => {
                warn!("📝 Validation failed: {field_errors:?}");
                (StatusCode::BAD_REQUEST, Json(field_errors)).into_response()
            }

            ServiceError::NotFound(msg) => {
                info!("🔍 {msg}");
                StatusCode::NOT_FOUND.into_response()
            }

            ServiceError::Repo(RepositoryError::Conflict(msg)) => {
                warn!("⚡ Conflict detected: {msg}");
                let body = Json(ErrorResponse {
                    status: "error".to_string(),
                    message: msg,
                });
                (StatusCode::CONFLICT, body).into_response()
            }

            ServiceError::Repo(RepositoryError::Sqlx(err)) => {
                error!("💾 Database error: {err}");
                let body = Json(ErrorResponse {
                    status: "error".to_string(),
                    message: "An unexpected error occurred while processing the request"
                        .to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
