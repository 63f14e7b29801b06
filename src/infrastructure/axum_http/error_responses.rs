use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::application::usecases::errors::UseCaseError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    pub message_ar: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, message_ar) = match self {
            AppError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized".to_string(),
                "يجب تسجيل الدخول أولاً",
            ),
            AppError::UseCase(UseCaseError::Internal(err)) | AppError::Internal(err) => {
                // Details stay in the logs.
                error!(error = ?err, "http: internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "حدث خطأ غير متوقع، حاول مرة أخرى",
                )
            }
            AppError::UseCase(err) => (err.status_code(), err.to_string(), err.message_ar()),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
            message_ar: message_ar.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::application::usecases::errors::{Resource, ValidationIssue};

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_rendered_bilingually() {
        let (status, body) =
            render(UseCaseError::NotFound(Resource::Product).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
        assert_eq!(body.message, "product not found");
        assert_eq!(body.message_ar, "المنتج غير موجود");
    }

    #[tokio::test]
    async fn validation_is_bad_request() {
        let (status, body) =
            render(UseCaseError::from(ValidationIssue::InvalidCredentials).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "invalid credentials");
    }

    #[tokio::test]
    async fn internal_details_are_not_leaked() {
        let (status, body) = render(
            UseCaseError::Internal(anyhow::anyhow!("lock poisoned at tables.rs:42")).into(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
        assert!(!body.message_ar.contains("tables.rs"));
    }
}
