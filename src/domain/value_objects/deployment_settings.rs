//! Deployment Settings Value Object
//!
//! Everything the lifecycle manager needs to know about one local
//! deployment: where the assets come from, which release to pin, where they
//! land on disk, and how long to wait for the dashboard.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Repository holding the upstream Docker deployment descriptors
pub const DEFAULT_REPO_URL: &str = "https://github.com/wazuh/wazuh-docker.git";

/// Release tag checked out by default
pub const DEFAULT_REPO_VERSION: &str = "v4.12.0";

const WORK_DIR_NAME: &str = ".wazuh-docker";
const STACK_SUBDIR: &str = "single-node";
const COMPOSE_FILE: &str = "docker-compose.yml";
const CERT_COMPOSE_FILE: &str = "generate-indexer-certs.yml";
const CERT_GENERATOR_SERVICE: &str = "generator";
const CERT_DIR: &str = "config/wazuh_indexer_ssl_certs";
const CERT_MARKER: &str = "admin.pem";
const DASHBOARD_CONTAINER: &str = "single-node-wazuh.dashboard-1";
const READY_MARKER: &str = "http server running at https://0.0.0.0:5601";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSettings {
    pub repo_url: String,
    pub version: String,
    pub work_dir: PathBuf,
    pub readiness_timeout: Duration,
    pub poll_interval: Duration,
    pub dashboard_container: String,
    pub ready_marker: String,
}

impl DeploymentSettings {
    /// Settings for a deployment materialized under `home`
    pub fn for_home(home: &Path) -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            version: DEFAULT_REPO_VERSION.to_string(),
            work_dir: home.join(WORK_DIR_NAME),
            readiness_timeout: Duration::from_secs(120),
            poll_interval: Duration::from_secs(5),
            dashboard_container: DASHBOARD_CONTAINER.to_string(),
            ready_marker: READY_MARKER.to_string(),
        }
    }

    /// Pin a different release. Bare versions (`4.12.0`) gain the `v` prefix
    /// the upstream tags use.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = normalize_version(version);
        self
    }

    pub fn with_readiness_timeout(mut self, timeout: Duration) -> Self {
        self.readiness_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Directory holding the single-node compose descriptor
    pub fn stack_dir(&self) -> PathBuf {
        self.work_dir.join(STACK_SUBDIR)
    }

    pub fn compose_file(&self) -> PathBuf {
        self.stack_dir().join(COMPOSE_FILE)
    }

    pub fn cert_dir(&self) -> PathBuf {
        self.stack_dir().join(CERT_DIR)
    }

    /// Credential whose presence means certificates were already generated
    pub fn cert_marker(&self) -> PathBuf {
        self.cert_dir().join(CERT_MARKER)
    }

    pub fn cert_compose_file(&self) -> &'static str {
        CERT_COMPOSE_FILE
    }

    pub fn cert_generator_service(&self) -> &'static str {
        CERT_GENERATOR_SERVICE
    }
}

fn normalize_version(version: &str) -> String {
    let trimmed = version.trim();
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("v{}", trimmed)
    } else {
        trimmed.to_string()
    }
}
