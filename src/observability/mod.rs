//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; request IDs flow through spans
//! - Level comes from `RUST_LOG` when set, else from the config file
//! - No metrics endpoint; log events are the observability surface

pub mod logging;
