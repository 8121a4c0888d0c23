//! Admin session
//!
//! Replaces a process-wide auth store: the session is created by a
//! successful login (or restored from storage) and dropped on logout.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};

/// Logged-in admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    /// Login email, unknown for restored sessions
    pub email: Option<String>,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
    /// Unix seconds, taken from the token's `exp` claim when it is a JWT
    pub expires_at: Option<i64>,
}

impl AdminSession {
    pub fn new(email: Option<String>, token: String) -> Self {
        let expires_at = Self::parse_jwt_exp(&token);
        Self {
            email,
            token,
            logged_in_at: Utc::now(),
            expires_at,
        }
    }

    /// Extracts the `exp` claim from a JWT without verifying it.
    pub fn parse_jwt_exp(token: &str) -> Option<i64> {
        // JWT: header.payload.signature
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1].trim_end_matches('=')).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
        payload.get("exp")?.as_i64()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .map(|exp| now.timestamp() >= exp)
            .unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
