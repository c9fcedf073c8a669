//! Request ID middleware.
//!
//! # Responsibilities
//! - Ensure every request carries an `x-request-id` header
//! - Echo the ID on the response for client-side correlation
//!
//! # Design Decisions
//! - An inbound ID is trusted and propagated; otherwise a UUID v4 is
//!   generated as early as possible so it appears in all trace spans

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match HeaderValue::from_str(&id) {
        Ok(value) => {
            request.headers_mut().insert(X_REQUEST_ID, value.clone());
            let mut response = next.run(request).await;
            response.headers_mut().insert(X_REQUEST_ID, value);
            response
        }
        // Unrepresentable inbound ID; pass through untouched.
        Err(_) => next.run(request).await,
    }
}
