//! Errors raised while talking to the CivicConnect backend

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, body read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot be used to build request URLs
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// 401 on a credentialed call; the admin token is missing or stale
    #[error("Admin session rejected: {0}")]
    SessionRejected(String),

    /// Login answered `success: false`
    #[error("Login rejected: {0}")]
    LoginRejected(String),

    /// Any other non-2xx answer, with the backend's `message` when it sent one
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// 2xx answer the client cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Token storage could not be read or written
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
