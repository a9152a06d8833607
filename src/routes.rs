//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}` - Redirect to the stored URL (public)
//! - `GET  /health`  - Health check (public)
//! - `POST /url`     - Create a mapping (Basic auth required)
//!
//! `/health` takes precedence over an alias named `health`.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields 500, the process keeps serving
//! - **Authentication** - Basic auth on `/url`

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by the server around this router.
pub fn app_router(state: AppState) -> Router {
    let admin_router = Router::new()
        .route("/url", post(shorten_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(admin_router)
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::layer())
        .layer(tracing::set_request_id_layer())
}
