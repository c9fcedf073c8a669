//! Gateway authorization header construction.
//!
//! Pure functions so the signatures are testable without network access.
//! Solapi's scheme: `signature = hex(HMAC_SHA256(secret, date + salt))`
//! with an RFC 3339 UTC date and a fresh random salt per request. The
//! legacy bulk endpoint uses plain Basic authorization instead.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 of `date + salt` keyed by the API secret.
pub fn solapi_signature(secret: &str, date: &str, salt: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(date.as_bytes());
    mac.update(salt.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Full `Authorization` header value for the Solapi v4 send endpoint.
pub fn solapi_auth_header(api_key: &str, secret: &str, date: &str, salt: &str) -> String {
    let signature = solapi_signature(secret, date, salt);
    format!("HMAC-SHA256 apiKey={api_key}, date={date}, salt={salt}, signature={signature}")
}

/// `Authorization` header value for the legacy Basic-auth bulk endpoint.
pub fn basic_auth_header(api_key: &str, secret: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{api_key}:{secret}")))
}

/// 32 hex characters of fresh randomness.
pub fn fresh_salt() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Current UTC instant in RFC 3339 with a `Z` suffix, as the gateway
/// expects in the signed `date` field.
pub fn utc_now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
