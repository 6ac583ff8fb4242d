//! Lifecycle Step Value Object
//!
//! Names each phase of the local deployment so errors and events can say
//! which one failed.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStep {
    CheckTools,
    Acquire,
    ProvisionCertificates,
    Activate,
    AwaitReady,
    Deactivate,
    RemoveVolumes,
    RemoveWorkDirectory,
}

impl LifecycleStep {
    /// Verb phrase used in "failed to ..." messages
    pub fn action(&self) -> &'static str {
        match self {
            LifecycleStep::CheckTools => "check required tools",
            LifecycleStep::Acquire => "clone the deployment repository",
            LifecycleStep::ProvisionCertificates => "generate certificates",
            LifecycleStep::Activate => "start the stack",
            LifecycleStep::AwaitReady => "wait for the dashboard",
            LifecycleStep::Deactivate => "stop the stack",
            LifecycleStep::RemoveVolumes => "remove stack volumes",
            LifecycleStep::RemoveWorkDirectory => "remove the deployment directory",
        }
    }
}

impl fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_action_phrase() {
        assert_eq!(LifecycleStep::RemoveVolumes.to_string(), "remove stack volumes");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&LifecycleStep::ProvisionCertificates).unwrap();
        assert_eq!(json, r#""provision_certificates""#);
    }
}
