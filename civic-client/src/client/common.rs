//! Common client definitions and shared functionality.

use std::marker::PhantomData;

use shared::Issue;

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::AdminSession;
use crate::storage::{LocalStorage, ADMIN_TOKEN_KEY};
use crate::types::{Anonymous, ClientStatus, SessionState};
use crate::ClientConfig;

// ============================================================================
// Core CivicClient Definition
// ============================================================================

/// A type-safe client for the CivicConnect backend.
///
/// The `S` parameter tracks whether an admin session exists:
///
/// - **Anonymous**: initial state. Can fetch issues, `login()` or `restore_session()`.
/// - **Authenticated**: holds an [`AdminSession`]. Can `logout()`.
///
/// # Example
///
/// ```no_run
/// use civic_client::ClientConfig;
///
/// # async fn example() -> Result<(), civic_client::ClientError> {
/// let client = ClientConfig::new("http://localhost:8000")
///     .with_storage_dir("./.civic")
///     .build_client()?;
///
/// let client = client.login("admin@city.gov", "secret").await?;
/// let issues = client.fetch_issues().await?;
/// let client = client.logout().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CivicClient<S: SessionState = Anonymous> {
    pub(crate) _state: PhantomData<S>,
    pub(crate) http: NetworkHttpClient,
    pub(crate) storage: LocalStorage,
    pub(crate) session: Option<AdminSession>,
    pub(crate) config: ClientConfig,
}

impl CivicClient<Anonymous> {
    /// Creates an anonymous client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config)?;
        let storage = LocalStorage::new(&config.storage_dir);
        Ok(Self {
            _state: PhantomData,
            http,
            storage,
            session: None,
            config,
        })
    }
}

// ============================================================================
// Common Methods (Available in All States)
// ============================================================================

impl<S: SessionState> CivicClient<S> {
    /// Fetches the full issue collection.
    pub async fn fetch_issues(&self) -> ClientResult<Vec<Issue>> {
        let issues = self.http.all_issues().await?;
        tracing::debug!(count = issues.len(), "Fetched issues");
        Ok(issues)
    }

    /// Returns the current admin token, if available.
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Checks if the client holds an admin session.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the client-local storage.
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Returns the client status.
    pub fn status(&self) -> ClientStatus {
        ClientStatus {
            has_stored_token: matches!(self.storage.get_item(ADMIN_TOKEN_KEY), Ok(Some(_))),
            is_authenticated: self.is_authenticated(),
        }
    }

    /// Transforms the client to a new state (internal use only).
    pub(crate) fn transition<NewS: SessionState>(self) -> CivicClient<NewS> {
        CivicClient {
            _state: PhantomData,
            http: self.http,
            storage: self.storage,
            session: self.session,
            config: self.config,
        }
    }
}
