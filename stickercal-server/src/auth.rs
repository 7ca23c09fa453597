//! Static bearer token check.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::routes::AppError;
use crate::state::AppState;

/// Reject requests without `Authorization: Bearer <token>` when a token is
/// configured. Without one every request passes.
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.token() else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if presented == Some(expected) {
        next.run(request).await
    } else {
        tracing::warn!(uri = %request.uri(), "rejected request without valid bearer token");
        AppError::unauthorized().into_response()
    }
}
