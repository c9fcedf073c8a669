//! Outbound SMS gateway subsystem.
//!
//! # Data Flow
//! ```text
//! handler builds OutboundMessage(s)
//!     → client.rs (provider selection: forward > solapi > mock)
//!     → auth.rs (HMAC-SHA256 or Basic authorization header)
//!     → reqwest POST to the provider, or local echo for mock/dry runs
//!     → SendOutcome (status + body) relayed back to the caller
//! ```
//!
//! # Design Decisions
//! - The provider is derived from configuration, never per request;
//!   only the `dry` flag can downgrade a request to the mock path
//! - One outbound call per inbound request; no batching or queueing
//!   beyond the gateway's own bulk endpoint

pub mod auth;
pub mod client;
pub mod types;

pub use client::GatewayClient;
pub use types::{GatewayError, OutboundMessage, Provider, SendOutcome};
