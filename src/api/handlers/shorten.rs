//! Handler for mapping creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use tracing::{debug, info};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from an alias to a URL.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "mysite" }
/// ```
///
/// `alias` is optional; when absent or empty a random alias is generated.
///
/// # Response
///
/// ```json
/// { "alias": "mysite" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or the URL is invalid
/// - 409 if the alias already exists
/// - 500 on storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Failed to decode request body");
        AppError::bad_request(
            "Failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let mapping = state
        .shortening_service
        .shorten(&payload.url, payload.alias.as_deref())
        .await
        .inspect_err(|e| {
            if let AppError::Conflict { .. } = e {
                info!(url = %payload.url, "Alias already exists");
            }
        })?;

    info!(alias = %mapping.alias, id = mapping.id, "Mapping created");

    Ok(Json(ShortenResponse {
        alias: mapping.alias,
    }))
}
