use std::path::PathBuf;

use civic_client::ClientConfig;

/// Console configuration
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CIVIC_API_URL | http://localhost:8000 | Backend base URL |
/// | CIVIC_STORAGE_DIR | ./.civic | Where the admin token is kept |
/// | CIVIC_REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | CIVIC_LOG_LEVEL | info | Default log filter (`RUST_LOG` wins) |
/// | CIVIC_LOG_JSON | false | JSON lines instead of text |
/// | CIVIC_LOG_DIR | unset | Enables daily log files in this directory |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub storage_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Loads from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads through `lookup`; unset or unparsable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup("CIVIC_API_URL").unwrap_or_else(|| "http://localhost:8000".into()),
            storage_dir: lookup("CIVIC_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./.civic")),
            request_timeout_secs: lookup("CIVIC_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: lookup("CIVIC_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("CIVIC_LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: lookup("CIVIC_LOG_DIR").filter(|dir| !dir.is_empty()),
        }
    }

    /// Command-line URL takes precedence over the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_timeout(self.request_timeout_secs)
            .with_storage_dir(self.storage_dir.clone())
    }
}
