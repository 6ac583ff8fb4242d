//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so integration tests
//! could not redirect the deployment directory or the `~/.wazctl.yaml`
//! lookup. `wazctl_home_dir()` checks `WAZCTL_TEST_HOME` first.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const WAZCTL_TEST_HOME_VAR: &str = "WAZCTL_TEST_HOME";

/// Get the home directory for wazctl-internal paths.
///
/// Used for the config search path and the local deployment directory
/// (`~/.wazuh-docker`).
pub fn wazctl_home_dir() -> Option<PathBuf> {
    std::env::var(WAZCTL_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
