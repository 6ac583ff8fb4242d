//! Indexer (OpenSearch security plugin) client

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use super::{build_http_client, send_json};
use crate::config::ConnectionConfig;
use crate::error::{ApiError, WazctlResult};

const INTERNAL_USERS_PATH: [&str; 4] = ["_plugins", "_security", "api", "internalusers"];

/// Body of an internal-user create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexerUserPayload {
    pub password: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backend_roles: Vec<String>,
}

/// Client using HTTP basic auth on every request
pub struct IndexerClient {
    base_url: String,
    http: Client,
    username: String,
    password: String,
    http_debug: bool,
}

impl IndexerClient {
    pub fn connect(conn: &ConnectionConfig) -> WazctlResult<Self> {
        conn.validate()?;
        Ok(Self {
            base_url: conn.base_url(),
            http: build_http_client(conn)?,
            username: conn.username.clone(),
            password: conn.password.clone(),
            http_debug: conn.http_debug,
        })
    }

    /// Create (or replace) an internal user mapped to `backend_role`
    pub fn create_user(
        &self,
        username: &str,
        password: &str,
        backend_role: &str,
    ) -> Result<Value, ApiError> {
        let url = self.internal_user_url(username)?;
        let payload = IndexerUserPayload {
            password: password.to_string(),
            backend_roles: vec![backend_role.to_string()],
        };

        let request = self
            .http
            .put(url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(&payload);
        send_json(request, url.as_str(), self.http_debug)
    }

    fn internal_user_url(&self, username: &str) -> Result<Url, ApiError> {
        let invalid = |message: String| ApiError::InvalidUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(INTERNAL_USERS_PATH)
            .push(username);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::test_connection as connection;

    #[test]
    fn payload_omits_empty_roles() {
        let payload = IndexerUserPayload {
            password: "pw".to_string(),
            backend_roles: vec![],
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"password":"pw"}"#);
    }

    #[test]
    fn username_is_escaped_in_path() {
        let client = IndexerClient::connect(&connection("indexer.local:9200")).unwrap();
        let url = client.internal_user_url("ops team/1").unwrap();
        assert_eq!(
            url.as_str(),
            "http://indexer.local:9200/_plugins/_security/api/internalusers/ops%20team%2F1"
        );
    }
}
