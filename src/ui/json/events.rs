//! Shared JSON event types for consistent CLI output.
//!
//! Every command writes NDJSON with an `event` field naming the line's kind.

use serde::Serialize;
use serde_json::{json, Value};

use wazctl::domain::ports::LifecycleEvent;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    /// True when a deployment failed but its containers are still up
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stack_running: bool,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            stack_running: false,
        }
    }

    pub fn with_stack_running(mut self, running: bool) -> Self {
        self.stack_running = running;
        self
    }
}

/// NDJSON form of a lifecycle event
pub fn lifecycle_event(event: &LifecycleEvent) -> Value {
    match event {
        LifecycleEvent::ToolAvailable { tool } => json!({ "event": "tool_available", "tool": tool }),
        LifecycleEvent::AssetsPresent { path } => {
            json!({ "event": "assets_present", "path": path.display().to_string() })
        }
        LifecycleEvent::Cloning { version, path } => json!({
            "event": "cloning",
            "version": version,
            "path": path.display().to_string(),
        }),
        LifecycleEvent::Cloned { path } => {
            json!({ "event": "cloned", "path": path.display().to_string() })
        }
        LifecycleEvent::CertificatesPresent => json!({ "event": "certificates_present" }),
        LifecycleEvent::GeneratingCertificates => json!({ "event": "generating_certificates" }),
        LifecycleEvent::CertificatesGenerated => json!({ "event": "certificates_generated" }),
        LifecycleEvent::StackStarting => json!({ "event": "stack_starting" }),
        LifecycleEvent::AwaitingReady { container, timeout } => json!({
            "event": "awaiting_ready",
            "container": container,
            "timeout_secs": timeout.as_secs(),
        }),
        LifecycleEvent::ProbePending { attempt, elapsed } => json!({
            "event": "probe_pending",
            "attempt": attempt,
            "elapsed_secs": elapsed.as_secs(),
        }),
        LifecycleEvent::StackReady {
            dashboard_url,
            username,
            password,
        } => json!({
            "event": "stack_ready",
            "dashboard_url": dashboard_url,
            "username": username,
            "password": password,
        }),
        LifecycleEvent::NothingToStop { path } => {
            json!({ "event": "nothing_to_stop", "path": path.display().to_string() })
        }
        LifecycleEvent::StackStopping => json!({ "event": "stack_stopping" }),
        LifecycleEvent::StackStopped => json!({ "event": "stack_stopped" }),
        LifecycleEvent::RemovingVolumes => json!({ "event": "removing_volumes" }),
        LifecycleEvent::Cleaned { path } => {
            json!({ "event": "cleaned", "path": path.display().to_string() })
        }
        LifecycleEvent::NothingToRemove { path } => {
            json!({ "event": "nothing_to_remove", "path": path.display().to_string() })
        }
    }
}
