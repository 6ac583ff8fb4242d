//! Domain Value Objects
//!
//! Immutable value types that describe a local deployment.

mod deployment_settings;
mod lifecycle_step;

pub use deployment_settings::{DeploymentSettings, DEFAULT_REPO_URL, DEFAULT_REPO_VERSION};
pub use lifecycle_step::LifecycleStep;
