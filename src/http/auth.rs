//! Bearer-token gate for the send and roster routes.
//!
//! Prevents the service from acting as an open relay when exposed to the
//! public internet. The gate is off while no token is configured, which
//! matches local development and the original deployment default.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::http::error::ApiError;
use crate::http::server::AppState;

pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.auth.enabled() {
        return next.run(request).await;
    }

    let authorized = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.trim() == state.config.auth.token)
        .unwrap_or(false);

    if authorized {
        next.run(request).await
    } else {
        ApiError::Unauthorized.into_response()
    }
}
