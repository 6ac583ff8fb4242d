//! Configuration module for wazctl
//!
//! Configuration hierarchy:
//! 1. Environment variables (WAZCTL_*)
//! 2. First file found in `./.wazctl.yaml`, `~/.wazctl.yaml`,
//!    `~/.config/wazctl.yaml`
//! 3. Built-in defaults (local deployment only)

mod loader;
mod types;

pub use loader::{
    candidate_paths, discover, load, load_optional, load_optional_from, load_with_warnings,
    with_env_overrides, ConfigWarning, LoadedConfig, CONFIG_LOCATIONS,
};
pub use types::{ConnectionConfig, IndexerConfig, LocalConfig, ManagerConfig, WazctlConfig};
