//! Error types for wazctl
//!
//! Library code returns `thiserror` enums; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ports::ProcessError;
use crate::domain::value_objects::LifecycleStep;

/// Result type alias for wazctl operations
pub type WazctlResult<T> = Result<T, WazctlError>;

/// Main error type for wazctl operations
#[derive(Error, Debug)]
pub enum WazctlError {
    /// None of the default config locations held a usable file
    #[error("no valid config file found in locations: {}", searched.join(", "))]
    ConfigNotFound { searched: Vec<String> },

    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Connection parameters failed validation
    #[error("invalid {component} connection: {message}")]
    InvalidConnection {
        component: &'static str,
        message: String,
    },

    /// Refused to overwrite an existing scaffold target
    #[error("{path} already exists (use --force to overwrite)")]
    FileExists { path: PathBuf },

    /// Rule-test document failed validation
    #[error("invalid rule test in {file}: {message}")]
    InvalidRuleTest { file: PathBuf, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Errors from the manager and indexer REST clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("authentication response did not contain a token")]
    MissingToken,
}

/// Errors from the local deployment lifecycle
#[derive(Error, Debug)]
pub enum DeploymentError {
    #[error("could not determine user home directory")]
    HomeDirUnavailable,

    #[error("{tool} not found in PATH; please install it")]
    ToolMissing { tool: String },

    /// The work directory exists but is missing files a finished clone has
    #[error(
        "deployment checkout at {} looks incomplete ({} is missing); run a clean first",
        path.display(),
        missing.display()
    )]
    PartialCheckout { path: PathBuf, missing: PathBuf },

    #[error("failed to {step}: {source}")]
    StepFailed {
        step: LifecycleStep,
        #[source]
        source: ProcessError,
    },

    /// The stack is up but the dashboard never reported ready
    #[error(
        "timed out after {}s waiting for {container} to be ready; the stack is still running",
        waited.as_secs()
    )]
    ReadinessTimeout { container: String, waited: Duration },

    #[error("failed to {step} at {}: {source}", path.display())]
    Filesystem {
        step: LifecycleStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DeploymentError {
    /// True when the stack was left running and may be inspected
    pub fn leaves_stack_running(&self) -> bool {
        matches!(self, DeploymentError::ReadinessTimeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_not_found() {
        let err = WazctlError::ConfigNotFound {
            searched: vec![".wazctl.yaml".to_string(), "~/.wazctl.yaml".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no valid config file found in locations: .wazctl.yaml, ~/.wazctl.yaml"
        );
    }

    #[test]
    fn test_error_display_step_failed_names_step() {
        let err = DeploymentError::StepFailed {
            step: LifecycleStep::ProvisionCertificates,
            source: ProcessError::Exit {
                program: "docker".to_string(),
                code: Some(1),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("failed to generate certificates"), "{msg}");
        assert!(!err.leaves_stack_running());
    }

    #[test]
    fn test_readiness_timeout_is_distinguishable() {
        let err = DeploymentError::ReadinessTimeout {
            container: "single-node-wazuh.dashboard-1".to_string(),
            waited: Duration::from_secs(120),
        };
        assert!(err.leaves_stack_running());
        assert!(err.to_string().contains("120s"));
    }
}
