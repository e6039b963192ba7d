use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use postforge_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::EmptyExtraction => {
                tracing::warn!("No article text extracted");
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            err if err.is_fetch_failure() => {
                tracing::error!(error = %err, "Failed to fetch URL");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch URL: {err}"),
                )
            }
            err => {
                tracing::error!(error = %err, "Repurpose request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred: {err}"),
                )
            }
        };

        let body = ErrorResponse { error: message };
        (status, axum::Json(body)).into_response()
    }
}
