//! Basic authentication middleware for mapping creation.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use sha2::{Digest, Sha256};

use crate::{error::AppError, state::AppState};

/// Credentials accepted by [`layer`].
///
/// Only SHA-256 digests are kept, so comparisons run over fixed-size values
/// regardless of input length.
#[derive(Clone)]
pub struct BasicCredentials {
    user_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl BasicCredentials {
    pub fn new(user: &str, password: &str) -> Self {
        Self {
            user_digest: digest(user),
            password_digest: digest(password),
        }
    }

    pub fn verify(&self, user: &str, password: &str) -> bool {
        let user_ok = digest(user) == self.user_digest;
        let password_ok = digest(password) == self.password_digest;
        user_ok & password_ok
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BasicCredentials(***)")
    }
}

fn digest(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(value.as_bytes()));
    out
}

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic` if the header is
/// missing, malformed, or the credentials do not match.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if !st
        .credentials
        .verify(&user, password.as_deref().unwrap_or_default())
    {
        tracing::warn!(user = %user, "Rejected credentials");
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid credentials"}),
        ));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
