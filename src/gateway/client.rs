//! Gateway client: provider selection and outbound calls.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use crate::config::GatewayConfig;
use crate::gateway::auth::{basic_auth_header, fresh_salt, solapi_auth_header, utc_now_rfc3339};
use crate::gateway::types::{GatewayError, OutboundMessage, Provider, SendOutcome};

/// Client for the upstream SMS gateway.
///
/// Wraps a shared `reqwest::Client`; cheap to clone via `Arc` at the
/// HTTP layer. The provider is fixed by configuration at construction.
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build outbound HTTP client");
        Self { http, config }
    }

    /// Provider precedence: forward URL, then direct credentials, then mock.
    pub fn provider(&self) -> Provider {
        if !self.config.forward_url.is_empty() {
            Provider::Forward
        } else if !self.config.api_key.is_empty() && !self.config.api_secret.is_empty() {
            Provider::Solapi
        } else {
            Provider::Mock
        }
    }

    /// Send one message. A `dry` request never leaves the process,
    /// regardless of the configured provider.
    pub async fn send(&self, msg: &OutboundMessage, dry: bool) -> Result<SendOutcome, GatewayError> {
        if dry {
            return Ok(mock_echo(msg, true));
        }
        match self.provider() {
            Provider::Mock => Ok(mock_echo(msg, false)),
            Provider::Forward => {
                let res = self
                    .http
                    .post(&self.config.forward_url)
                    .json(msg)
                    .send()
                    .await
                    .map_err(GatewayError::ForwardFailed)?;
                let (status, body) = relay_body(res).await;
                Ok(SendOutcome {
                    provider: Provider::Forward,
                    status,
                    body,
                })
            }
            Provider::Solapi => {
                let header = solapi_auth_header(
                    &self.config.api_key,
                    &self.config.api_secret,
                    &utc_now_rfc3339(),
                    &fresh_salt(),
                );
                let res = self
                    .http
                    .post(&self.config.send_url)
                    .header("Authorization", header)
                    .json(&json!({ "message": msg }))
                    .send()
                    .await
                    .map_err(GatewayError::SolapiFailed)?;
                let (status, body) = relay_body(res).await;
                Ok(SendOutcome {
                    provider: Provider::Solapi,
                    status,
                    body: json!({
                        "ok": status < 300,
                        "provider": "solapi",
                        "response": body,
                    }),
                })
            }
        }
    }

    /// Send a batch through the bulk endpoint (Basic authorization on
    /// the direct path). Forward mode relays the whole batch as one
    /// `{"messages": [...]}` document.
    pub async fn send_bulk(
        &self,
        messages: &[OutboundMessage],
        dry: bool,
    ) -> Result<SendOutcome, GatewayError> {
        if dry {
            return Ok(mock_echo_bulk(messages, true));
        }
        let payload = json!({ "messages": messages });
        match self.provider() {
            Provider::Mock => Ok(mock_echo_bulk(messages, false)),
            Provider::Forward => {
                let res = self
                    .http
                    .post(&self.config.forward_url)
                    .json(&payload)
                    .send()
                    .await
                    .map_err(GatewayError::ForwardFailed)?;
                let (status, body) = relay_body(res).await;
                Ok(SendOutcome {
                    provider: Provider::Forward,
                    status,
                    body,
                })
            }
            Provider::Solapi => {
                let res = self
                    .http
                    .post(&self.config.bulk_send_url)
                    .header(
                        "Authorization",
                        basic_auth_header(&self.config.api_key, &self.config.api_secret),
                    )
                    .json(&payload)
                    .send()
                    .await
                    .map_err(GatewayError::SolapiFailed)?;
                let (status, body) = relay_body(res).await;
                Ok(SendOutcome {
                    provider: Provider::Solapi,
                    status,
                    body,
                })
            }
        }
    }
}

/// Relay an upstream response body: JSON is passed through, anything
/// else is wrapped as `{"raw": "..."}` so callers always get JSON.
async fn relay_body(res: reqwest::Response) -> (u16, Value) {
    let status = res.status().as_u16();
    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    if is_json {
        match res.json::<Value>().await {
            Ok(body) => (status, body),
            Err(_) => (status, json!({ "raw": "" })),
        }
    } else {
        let text = res.text().await.unwrap_or_default();
        (status, json!({ "raw": text }))
    }
}

fn mock_echo(msg: &OutboundMessage, dry: bool) -> SendOutcome {
    SendOutcome {
        provider: Provider::Mock,
        status: 200,
        body: json!({
            "ok": true,
            "provider": "mock",
            "dry": dry,
            "echo": {
                "to": msg.to,
                "from": msg.from,
                "text": msg.text,
                "len": msg.text.chars().count(),
            },
            "at": utc_now_rfc3339(),
        }),
    }
}

fn mock_echo_bulk(messages: &[OutboundMessage], dry: bool) -> SendOutcome {
    let echoes: Vec<Value> = messages
        .iter()
        .map(|m| {
            json!({
                "to": m.to,
                "from": m.from,
                "text": m.text,
                "len": m.text.chars().count(),
            })
        })
        .collect();
    SendOutcome {
        provider: Provider::Mock,
        status: 200,
        body: json!({
            "ok": true,
            "provider": "mock",
            "dry": dry,
            "count": messages.len(),
            "echo": echoes,
            "at": utc_now_rfc3339(),
        }),
    }
}
