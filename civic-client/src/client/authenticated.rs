//! Authenticated state: session access and logout.

use crate::http::HttpClient;
use crate::session::AdminSession;
use crate::storage::ADMIN_TOKEN_KEY;
use crate::types::{Anonymous, Authenticated};

use super::common::CivicClient;

impl CivicClient<Authenticated> {
    /// Returns the admin session.
    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    /// Logs out.
    ///
    /// The backend session is terminated best-effort; the local session and
    /// the stored token are cleared regardless of the backend's answer.
    pub async fn logout(mut self) -> CivicClient<Anonymous> {
        match self.http.admin_logout().await {
            Ok(message) => tracing::info!(message = %message, "Admin logged out."),
            Err(e) => tracing::warn!("Backend logout failed: {}", e),
        }

        if let Err(e) = self.storage.remove_item(ADMIN_TOKEN_KEY) {
            tracing::warn!("Failed to clear stored admin token: {}", e);
        }
        self.http.set_token(None);
        self.session = None;

        self.transition()
    }
}
