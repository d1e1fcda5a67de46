use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::form::InvalidInputError;

/// Shown verbatim (as `text/plain`, status 200) for any unparseable form field.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numeric values only.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Malformed form submission: {0}")]
    MalformedForm(String),

    #[error("Upload storage error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(e) => {
                tracing::info!("Rejected submission: {e}");
                return (StatusCode::OK, INVALID_INPUT_MESSAGE).into_response();
            }
            AppError::MalformedForm(msg) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_FORM",
                msg.clone(),
            ),
            AppError::Upload(e) => {
                tracing::error!("Upload storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_ERROR",
                    "The uploaded file could not be stored".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_plain_text_ok() {
        let response = AppError::from(InvalidInputError::Missing("cgpa")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"), "{content_type}");
    }

    #[test]
    fn test_storage_failure_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let response = AppError::from(io).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_malformed_form_is_bad_request() {
        let response = AppError::MalformedForm("bad boundary".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
