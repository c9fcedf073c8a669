//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → auth.rs (bearer gate on guarded routes)
//!     → handlers.rs (validate, call roster/gateway subsystems)
//!     → error.rs (structured JSON failures)
//! ```

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
