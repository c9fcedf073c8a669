//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files,
//! and every field has a default so a minimal (or absent) config works.

use serde::{Deserialize, Serialize};

/// Root configuration for the SMS relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound sender identity and message template pieces.
    pub sender: SenderConfig,

    /// Upstream gateway selection and credentials.
    pub gateway: GatewayConfig,

    /// Inbound bearer-token gate.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Sender identity and report-message template pieces.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SenderConfig {
    /// Default "from" number when the request omits one (digits only).
    pub default_from: String,

    /// First line prepended to bulk report messages (e.g., the academy
    /// name in brackets). Empty = omitted.
    pub message_header: String,

    /// Report title line for bulk messages (e.g., a monthly-report
    /// heading). Empty = omitted.
    pub message_title: String,
}

/// Upstream gateway configuration.
///
/// Provider precedence: `forward_url` set → forward; otherwise
/// `api_key` + `api_secret` set → direct gateway; otherwise mock.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// If set, relay `{to, from, text}` JSON to this URL instead of
    /// calling the gateway directly.
    pub forward_url: String,

    /// Gateway API key (HMAC / Basic authorization).
    pub api_key: String,

    /// Gateway API secret.
    pub api_secret: String,

    /// Single-message send endpoint (HMAC-SHA256 authorization).
    pub send_url: String,

    /// Bulk send endpoint (Basic authorization, legacy path).
    pub bulk_send_url: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            forward_url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            send_url: "https://api.solapi.com/messages/v4/send".to_string(),
            bulk_send_url: "https://api.solapi.com/messages/v4/send-many".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Inbound bearer-token gate. An empty token disables the gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Required value of `Authorization: Bearer <token>` on /api routes.
    pub token: String,
}

impl AuthConfig {
    pub fn enabled(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
