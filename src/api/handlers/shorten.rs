//! Handler for the shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://localhost:8080/aB3dE6gH" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not the expected JSON or `url` is empty.
/// The `Content-Type` header is not checked.
/// Returns 500 Internal Server Error on any service failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    debug!(original_url = %payload.url, "Shorten request");

    let service = &state.shortening_service;
    let created = service.create_short_url(payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: service.short_url(&created.short_code),
        }),
    ))
}
