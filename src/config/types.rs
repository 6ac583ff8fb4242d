//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::DeploymentSettings;
use crate::error::{WazctlError, WazctlResult};

/// Contents of `.wazctl.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WazctlConfig {
    #[serde(default)]
    pub wazuh: ManagerConfig,

    #[serde(default)]
    pub indexer: IndexerConfig,

    #[serde(default)]
    pub local: LocalConfig,
}

/// Wazuh manager API connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub port: String,

    #[serde(default)]
    pub protocol: String,

    #[serde(default)]
    pub wui_username: String,

    #[serde(default)]
    pub wui_password: String,

    #[serde(default)]
    pub skip_tls_verify: bool,

    #[serde(default)]
    pub http_debug: bool,
}

/// Search indexer (OpenSearch) connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerConfig {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub port: String,

    #[serde(default)]
    pub protocol: String,

    #[serde(default)]
    pub indexer_username: String,

    #[serde(default)]
    pub indexer_password: String,

    #[serde(default)]
    pub skip_tls_verify: bool,

    #[serde(default)]
    pub http_debug: bool,
}

/// Local Docker deployment overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,
}

/// Validated view of either connection section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub component: &'static str,
    pub protocol: String,
    pub endpoint: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub skip_tls_verify: bool,
    pub http_debug: bool,
}

impl ConnectionConfig {
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.endpoint, self.port)
    }

    pub fn validate(&self) -> WazctlResult<()> {
        let invalid = |message: String| WazctlError::InvalidConnection {
            component: self.component,
            message,
        };

        if self.endpoint.trim().is_empty() {
            return Err(invalid("endpoint is empty".to_string()));
        }
        if self.protocol != "http" && self.protocol != "https" {
            return Err(invalid(format!("invalid protocol: {:?}", self.protocol)));
        }
        if self.port.trim().is_empty() {
            return Err(invalid("port is empty".to_string()));
        }
        Ok(())
    }
}

impl ManagerConfig {
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            component: "wazuh manager",
            protocol: self.protocol.clone(),
            endpoint: self.endpoint.clone(),
            port: self.port.clone(),
            username: self.wui_username.clone(),
            password: self.wui_password.clone(),
            skip_tls_verify: self.skip_tls_verify,
            http_debug: self.http_debug,
        }
    }
}

impl IndexerConfig {
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            component: "indexer",
            protocol: self.protocol.clone(),
            endpoint: self.endpoint.clone(),
            port: self.port.clone(),
            username: self.indexer_username.clone(),
            password: self.indexer_password.clone(),
            skip_tls_verify: self.skip_tls_verify,
            http_debug: self.http_debug,
        }
    }
}

impl LocalConfig {
    /// Durations must be positive
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("readinessTimeoutSecs", self.readiness_timeout_secs),
            ("pollIntervalSecs", self.poll_interval_secs),
        ] {
            if value == Some(0) {
                return Err(format!("local.{key} must be greater than zero"));
            }
        }
        Ok(())
    }

    /// Apply the overrides present in this section to `settings`
    pub fn apply(&self, mut settings: DeploymentSettings) -> DeploymentSettings {
        if let Some(version) = self.repo_version.as_deref().filter(|v| !v.trim().is_empty()) {
            settings = settings.with_version(version);
        }
        if let Some(secs) = self.readiness_timeout_secs {
            settings = settings.with_readiness_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.poll_interval_secs {
            settings = settings.with_poll_interval(Duration::from_secs(secs));
        }
        settings
    }
}

impl WazctlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> WazctlResult<Self> {
        super::loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Check values that parse but cannot be used
    pub fn validate(&self, file: &Path) -> WazctlResult<()> {
        self.local
            .validate()
            .map_err(|message| WazctlError::InvalidConfig {
                file: file.to_path_buf(),
                message,
            })
    }
}

/// Ports are often written unquoted (`port: 55000`); accept both forms.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(s) => s,
        Port::Number(n) => n.to_string(),
    })
}
