use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ContactResponse;

#[derive(Debug)]
pub enum AppError {
    /// One or more submission rules failed, in evaluation order.
    Validation(Vec<String>),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(failures) => write!(f, "Validation failed: {}", failures.join(", ")),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(failures) => {
                tracing::debug!("Contact submission rejected: {failures:?}");
                (StatusCode::BAD_REQUEST, failures.join(", "))
            }
            AppError::Internal(msg) => {
                tracing::error!("Contact form error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(ContactResponse::rejected(message))).into_response()
    }
}
