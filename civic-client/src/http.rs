// civic-client/src/http.rs
// HTTP client - network calls to the CivicConnect backend

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{
    AdminLoginRequest, AdminLoginResponse, IssueListResponse, LogoutResponse, ADMIN_LOGIN_PATH,
    ADMIN_LOGOUT_PATH, ALL_ISSUES_PATH,
};
use shared::Issue;

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body the backend sends alongside non-2xx statuses
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn all_issues(&self) -> ClientResult<Vec<Issue>>;
    async fn admin_login(&self, email: &str, password: &str) -> ClientResult<String>;
    async fn admin_logout(&self) -> ClientResult<String>;
    fn set_token(&mut self, token: Option<String>);
    fn token(&self) -> Option<&str>;
}

/// Network HTTP client
///
/// Keeps a cookie store so session cookies set at login ride along with
/// later credentialed requests, and sends the admin token as a bearer header.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let parsed = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::SessionRejected(message),
                _ => ClientError::Backend {
                    status: status.as_u16(),
                    message,
                },
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut req = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn all_issues(&self) -> ClientResult<Vec<Issue>> {
        let resp: IssueListResponse = self.get(ALL_ISSUES_PATH).await?;
        Ok(resp.issues)
    }

    async fn admin_login(&self, email: &str, password: &str) -> ClientResult<String> {
        let req = AdminLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AdminLoginResponse = self.post(ADMIN_LOGIN_PATH, &req).await?;
        if !resp.success {
            return Err(ClientError::LoginRejected(
                resp.message.unwrap_or_else(|| "Login failed".into()),
            ));
        }
        resp.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::InvalidResponse("Missing login token".into()))
    }

    async fn admin_logout(&self) -> ClientResult<String> {
        let resp: LogoutResponse = self.get(ADMIN_LOGOUT_PATH).await?;
        Ok(resp.message)
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
