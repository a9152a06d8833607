//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns 307 Temporary Redirect with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 500 on storage failure.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.resolution_service.resolve(&alias).await?;

    debug!(alias = %alias, url = %url, "Redirecting");

    Ok(Redirect::temporary(&url))
}
