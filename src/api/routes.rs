//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short URL
/// - `GET  /health`   - Store connectivity check
/// - `GET  /{code}`   - Redirect to the original URL
///
/// Static paths take precedence over `/{code}`, so `/health` is never
/// treated as a short code.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
