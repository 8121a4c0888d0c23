//! Anonymous state: login and session restore.

use crate::error::ClientError;
use crate::http::HttpClient;
use crate::session::AdminSession;
use crate::storage::ADMIN_TOKEN_KEY;
use crate::types::{Anonymous, Authenticated};

use super::common::CivicClient;

impl CivicClient<Anonymous> {
    /// Logs in with admin credentials.
    ///
    /// On success the token is attached to subsequent requests and persisted
    /// under [`ADMIN_TOKEN_KEY`].
    ///
    /// # Errors
    ///
    /// `ClientError::LoginRejected` when the backend answers `success: false`, or any
    /// transport/storage error.
    pub async fn login(
        mut self,
        email: &str,
        password: &str,
    ) -> Result<CivicClient<Authenticated>, ClientError> {
        tracing::info!(email = %email, "Admin login");
        let token = self.http.admin_login(email, password).await?;

        self.storage.set_item(ADMIN_TOKEN_KEY, &token)?;
        self.http.set_token(Some(token.clone()));
        self.session = Some(AdminSession::new(Some(email.to_string()), token));

        tracing::info!("Admin logged in successfully.");
        Ok(self.transition())
    }

    /// Restores an admin session from the token in local storage.
    ///
    /// Returns the unchanged anonymous client when there is no stored token,
    /// the token has expired, or storage cannot be read. An expired token is
    /// removed from storage.
    pub fn restore_session(mut self) -> Result<CivicClient<Authenticated>, CivicClient<Anonymous>> {
        let token = match self.storage.get_item(ADMIN_TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return Err(self),
            Err(e) => {
                tracing::warn!("Failed to read stored admin token: {}", e);
                return Err(self);
            }
        };

        let session = AdminSession::new(None, token);
        if session.is_expired() {
            tracing::info!("Stored admin token expired, discarding");
            if let Err(e) = self.storage.remove_item(ADMIN_TOKEN_KEY) {
                tracing::warn!("Failed to remove expired admin token: {}", e);
            }
            return Err(self);
        }

        self.http.set_token(Some(session.token.clone()));
        self.session = Some(session);
        tracing::info!("Admin session restored from local storage");
        Ok(self.transition())
    }
}
