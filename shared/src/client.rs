//! Client-related types shared between the backend API and its consumers
//!
//! Request/response shapes of the three endpoints the dashboard talks to.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Issue;

// =============================================================================
// Endpoints
// =============================================================================

/// `GET` full issue collection
pub const ALL_ISSUES_PATH: &str = "user-issue/all-issue";
/// `POST` admin login
pub const ADMIN_LOGIN_PATH: &str = "admin/auth/login";
/// `GET` admin session termination
pub const ADMIN_LOGOUT_PATH: &str = "admin/logout";

// =============================================================================
// Issue API DTOs
// =============================================================================

/// Issue list response
///
/// Entries are decoded one by one; an entry that is not an issue at all
/// (no id, not an object) is dropped with a warning instead of failing the
/// whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueListResponse {
    #[serde(default, deserialize_with = "skip_undecodable")]
    pub issues: Vec<Issue>,
}

fn skip_undecodable<'de, D>(deserializer: D) -> Result<Vec<Issue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Issue>(value) {
            Ok(issue) => Some(issue),
            Err(e) => {
                tracing::warn!(index, "Dropping undecodable issue: {}", e);
                None
            }
        })
        .collect())
}

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Logout response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub message: String,
}
