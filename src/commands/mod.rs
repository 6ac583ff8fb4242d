//! Command handlers for the wazctl binary

pub mod agents;
pub mod auth;
pub mod docker;
pub mod rule;
pub mod scaffold;
pub mod user;

use anyhow::Result;
use wazctl::config::{self, LoadedConfig};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Load the required config file and surface unknown-key warnings
pub(crate) fn load_config(ui: &UiContext) -> Result<LoadedConfig> {
    let loaded = config::load()?;
    tracing::debug!(path = %loaded.path.display(), "using config file");
    print_config_warnings(&loaded, ui);
    Ok(loaded)
}
