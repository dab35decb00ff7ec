//! Error types for the Pages server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::document::StoreError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::MalformedRequest(msg) => {
                (StatusCode::BAD_REQUEST, "malformed_request", msg.clone())
            }
            AppError::Store(e) => match e {
                StoreError::InvalidSlug(reason) => {
                    (StatusCode::BAD_REQUEST, "invalid_slug", reason.to_string())
                }
                StoreError::NotFound(slug) => (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    format!("Page not found: {}", slug),
                ),
                StoreError::StorageUnavailable { .. } => {
                    tracing::error!("Storage error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "storage_unavailable",
                        "Storage unavailable".to_string(),
                    )
                }
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SlugError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::BadRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::MalformedRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::InvalidSlug(SlugError::PathTraversal).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::NotFound("missing".into()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(
                StoreError::StorageUnavailable {
                    op: "listing",
                    path: "/nowhere".into(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                }
                .into()
            ),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
