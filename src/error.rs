//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::booking::responses::ErrorResponse;
use crate::booking::BookingError;
use crate::store::StoreError;

/// Page error type, rendered as HTML
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
        };

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Olympus Detailing</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Booking API error type, rendered as JSON
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Booking(BookingError::UnknownService(id)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error_type: "unknown_service".to_string(),
                    message: self.to_string(),
                    details: Some(json!({ "service_id": id })),
                },
            ),
            ApiError::Booking(BookingError::InvalidRequest(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error_type: "invalid_request".to_string(),
                    message: self.to_string(),
                    details: Some(json!(errors)),
                },
            ),
            ApiError::Store(StoreError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error_type: "not_found".to_string(),
                    message: self.to_string(),
                    details: Some(json!({ "id": id })),
                },
            ),
            ApiError::Store(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "storage_error".to_string(),
                        message: "Storage error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
