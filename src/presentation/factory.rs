//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::DeploymentManager;
use crate::config::WazctlConfig;
use crate::domain::ports::LifecycleEventSink;
use crate::domain::value_objects::DeploymentSettings;
use crate::error::{DeploymentError, WazctlResult};
use crate::infrastructure::{
    wazctl_home_dir, IndexerClient, ManagerClient, SystemClock, SystemCommandRunner,
};

/// Type alias for the deployment manager backed by real processes
pub type SystemDeploymentManager<E> = DeploymentManager<SystemCommandRunner, SystemClock, E>;

/// Built-in settings for `home`, with the `local` section applied
pub fn deployment_settings(home: &Path, config: Option<&WazctlConfig>) -> DeploymentSettings {
    let settings = DeploymentSettings::for_home(home);
    match config {
        Some(config) => config.local.apply(settings),
        None => settings,
    }
}

/// Create a deployment manager rooted in the user's home directory.
///
/// With `json` set, child process stdout is routed to stderr.
pub fn create_deployment_manager<E: LifecycleEventSink>(
    config: Option<&WazctlConfig>,
    events: E,
    json: bool,
) -> WazctlResult<SystemDeploymentManager<E>> {
    let home = wazctl_home_dir().ok_or(DeploymentError::HomeDirUnavailable)?;
    let settings = deployment_settings(&home, config);
    tracing::debug!(
        work_dir = %settings.work_dir.display(),
        version = %settings.version,
        "deployment settings"
    );

    Ok(DeploymentManager::new(
        SystemCommandRunner::new().with_json_output(json),
        SystemClock,
        events,
        settings,
    ))
}

/// Authenticated manager client for the `wazuh` section
pub fn create_manager_client(config: &WazctlConfig) -> WazctlResult<ManagerClient> {
    ManagerClient::connect(&config.wazuh.connection())
}

/// Indexer client for the `indexer` section
pub fn create_indexer_client(config: &WazctlConfig) -> WazctlResult<IndexerClient> {
    IndexerClient::connect(&config.indexer.connection())
}
