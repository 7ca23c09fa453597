//! HTTP service for stickercal.
//!
//! Four routes over the shared event collection, mounted under a configurable
//! prefix:
//!
//! | Method | Path           | Response            |
//! |--------|----------------|---------------------|
//! | GET    | `/events`      | `{events: [...]}`   |
//! | POST   | `/events`      | `{event}` or 400    |
//! | PUT    | `/events/{id}` | `{event}`           |
//! | DELETE | `/events/{id}` | `{success: true}`   |

mod auth;
mod routes;
mod state;

use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::{AppError, ErrorResponse};
pub use state::AppState;

/// Build the full application router.
pub fn app(state: AppState, prefix: &str) -> Router {
    let api = routes::events::router()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    let prefix = prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, api)
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
