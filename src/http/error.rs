//! API error responses.
//!
//! Every failure leaves the service as structured JSON with `ok: false`
//! and a short machine-readable `error` code, so the front-end can phrase
//! its own user-facing message per case.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::gateway::GatewayError;
use crate::roster::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": message }),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "ok": false, "error": "unauthorized" }),
            ),
            ApiError::Roster(err) => {
                // Distinct codes so callers can phrase the two cases
                // differently; detection failures also name the fields.
                let body = match err {
                    RosterError::ColumnDetectionFailure { missing } => json!({
                        "ok": false,
                        "error": "column-detection-failure",
                        "missing": missing,
                        "detail": err.to_string(),
                    }),
                    RosterError::EmptyInput => json!({
                        "ok": false,
                        "error": "empty-input",
                        "detail": err.to_string(),
                    }),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            ApiError::Gateway(err) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "ok": false,
                    "error": err.code(),
                    "detail": err.to_string(),
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
