//! REST clients for the Wazuh manager and the indexer
//!
//! Both clients are blocking; wazctl issues one or two requests per
//! invocation and has no runtime to share.

mod indexer;
mod manager;

pub use indexer::{IndexerClient, IndexerUserPayload};
pub use manager::{parse_token, ManagerClient};

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::ConnectionConfig;
use crate::error::ApiError;

const USER_AGENT: &str = concat!("wazctl/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_http_client(conn: &ConnectionConfig) -> Result<Client, ApiError> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(conn.skip_tls_verify);

    // Local deployments are never reached through a proxy.
    if is_loopback(&conn.endpoint) {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|source| ApiError::Transport {
            url: conn.base_url(),
            source,
        })
}

fn is_loopback(endpoint: &str) -> bool {
    let host = endpoint.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host
            .parse::<std::net::IpAddr>()
            .is_ok_and(|ip| ip.is_loopback())
}

/// Send a request and decode a JSON body from a 2xx response
pub(crate) fn send_json(
    request: RequestBuilder,
    url: &str,
    http_debug: bool,
) -> Result<Value, ApiError> {
    let response = send(request, url, http_debug)?;
    let body = response.text().map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn send(
    request: RequestBuilder,
    url: &str,
    http_debug: bool,
) -> Result<Response, ApiError> {
    if http_debug {
        tracing::info!(url, "sending request");
    }

    let response = request.send().map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if http_debug {
        tracing::info!(url, status = status.as_u16(), "received response");
    }

    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

#[cfg(test)]
pub(crate) fn test_connection(host_port: &str) -> ConnectionConfig {
    let (endpoint, port) = host_port.split_once(':').unwrap_or((host_port, "80"));
    ConnectionConfig {
        component: "test",
        protocol: "http".to_string(),
        endpoint: endpoint.to_string(),
        port: port.to_string(),
        username: "wazuh-wui".to_string(),
        password: "secret".to_string(),
        skip_tls_verify: false,
        http_debug: true,
    }
}
