pub mod events;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use stickercal_core::StickerError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error returned from a handler, rendered as `{error, details}` JSON.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        AppError {
            status,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    /// Map a core error at the handler boundary. Validation errors keep their
    /// own message; anything else becomes a 500 carrying `message`, with the
    /// underlying error as details.
    pub fn context(message: &'static str) -> impl FnOnce(StickerError) -> AppError {
        move |err| {
            let status =
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_client_error() {
                AppError::new(status, err.to_string())
            } else {
                tracing::error!(error = %err, "{message}");
                AppError::new(status, message).with_details(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.error,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}
