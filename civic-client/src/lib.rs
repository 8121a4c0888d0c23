//! Civic Client - HTTP client for the CivicConnect backend
//!
//! Provides the issue feed and the admin session lifecycle
//! (login, restore, logout) on top of a client-local token store.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;
pub mod types;

pub use client::CivicClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::AdminSession;
pub use storage::{LocalStorage, ADMIN_TOKEN_KEY};
pub use types::{Anonymous, Authenticated, ClientStatus, SessionState};

// Re-export shared types for convenience
pub use shared::client::{AdminLoginRequest, AdminLoginResponse, IssueListResponse, LogoutResponse};
