//! Gateway message and outcome types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single message handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub to: String,
    pub from: String,
    pub text: String,
}

/// Which upstream the client will talk to.
///
/// Precedence mirrors the deployment knobs: a forward URL beats direct
/// gateway credentials, and with neither configured everything is mocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Forward,
    Solapi,
    Mock,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Forward => "forward",
            Provider::Solapi => "solapi",
            Provider::Mock => "mock",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a gateway call, relayed to the HTTP caller largely as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SendOutcome {
    pub provider: Provider,
    /// Upstream (or synthesized) HTTP status code.
    pub status: u16,
    /// Upstream response body, or the mock echo document.
    pub body: Value,
}

impl SendOutcome {
    pub fn ok(&self) -> bool {
        self.status < 300
    }
}

/// Transport-level gateway failures. Upstream error *responses* are not
/// errors here; they come back as a `SendOutcome` with their status.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("forward request failed: {0}")]
    ForwardFailed(#[source] reqwest::Error),

    #[error("solapi request failed: {0}")]
    SolapiFailed(#[source] reqwest::Error),
}

impl GatewayError {
    /// Short machine-readable code used in error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::ForwardFailed(_) => "forward-failed",
            GatewayError::SolapiFailed(_) => "solapi-failed",
        }
    }
}
