//! Agents command handler

use anyhow::{Context, Result};

use wazctl::presentation::factory::create_manager_client;

use crate::ui::context::UiContext;
use crate::ui::output::print_json;

pub fn cmd_agents_list(ui: &UiContext) -> Result<()> {
    let loaded = super::load_config(ui)?;
    let agents = create_manager_client(&loaded.config)?
        .list_agents()
        .context("failed to list agents")?;

    print_json(&agents, ui.json)?;
    Ok(())
}
