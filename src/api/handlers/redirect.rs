//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on store failure, or if the stored URL
/// cannot be carried in a header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_url = state
        .shortening_service
        .get_original_url(&code)
        .await
        .inspect_err(|err| {
            if err.is_not_found() {
                info!(code = %code, "Short URL not found");
            }
        })?;

    let location = HeaderValue::from_bytes(short_url.original_url.as_bytes()).map_err(|e| {
        error!(code = %code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Internal server error", json!({}))
    })?;

    info!(code = %code, target = %short_url.original_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
