//! Wazuh manager API client

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{build_http_client, send, send_json};
use crate::config::ConnectionConfig;
use crate::error::{ApiError, WazctlResult};

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    data: Option<AuthData>,
}

#[derive(Debug, Deserialize)]
struct AuthData {
    #[serde(default)]
    token: String,
}

/// Authenticated client; the JWT is fetched once at connect time
pub struct ManagerClient {
    base_url: String,
    http: Client,
    token: String,
    http_debug: bool,
}

impl ManagerClient {
    /// Validate the connection and exchange credentials for a JWT
    pub fn connect(conn: &ConnectionConfig) -> WazctlResult<Self> {
        conn.validate()?;
        let http = build_http_client(conn)?;
        let base_url = conn.base_url();
        tracing::debug!(%base_url, "authenticating against wazuh manager");

        let token = request_token(&http, &base_url, conn)?;
        Ok(Self {
            base_url,
            http,
            token,
            http_debug: conn.http_debug,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Create a manager (RBAC) user
    pub fn create_user(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let url = format!(
            "{}/security/users?pretty=true&wait_for_complete=true",
            self.base_url
        );
        let body = json!({ "username": username, "password": password });
        let request = self.http.post(&url).bearer_auth(&self.token).json(&body);
        send_json(request, &url, self.http_debug)
    }

    /// List all agents registered with the manager
    pub fn list_agents(&self) -> Result<Value, ApiError> {
        let url = format!("{}/agents?pretty=true", self.base_url);
        let request = self.http.get(&url).bearer_auth(&self.token);
        send_json(request, &url, self.http_debug)
    }
}

fn request_token(http: &Client, base_url: &str, conn: &ConnectionConfig) -> Result<String, ApiError> {
    let url = format!("{}/security/user/authenticate", base_url);
    let request = http
        .post(&url)
        .basic_auth(&conn.username, Some(&conn.password));

    let body = send(request, &url, conn.http_debug)?
        .text()
        .map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
    parse_token(&body).map_err(|e| match e {
        ApiError::Decode { message, .. } => ApiError::Decode { url, message },
        other => other,
    })
}

/// Extract `data.token` from an authentication response body
pub fn parse_token(body: &str) -> Result<String, ApiError> {
    let response: AuthResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode {
        url: "/security/user/authenticate".to_string(),
        message: e.to_string(),
    })?;

    response
        .data
        .map(|d| d.token.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingToken)
}
