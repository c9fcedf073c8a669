//! SMS relay service for a tutoring academy.
//!
//! Accepts roster uploads and report messages over HTTP and relays them
//! to an SMS gateway (direct with HMAC-SHA256 authorization, forwarded
//! to another relay, or mocked locally). The roster normalizer is a
//! pure library usable without the service around it.

pub mod config;
pub mod gateway;
pub mod http;
pub mod observability;
pub mod roster;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use roster::{build_roster, normalize_phone, roster_from_json, Roster};
