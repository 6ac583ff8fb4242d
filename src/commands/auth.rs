//! Auth command handler

use anyhow::{Context, Result};
use serde_json::json;

use wazctl::presentation::factory::create_manager_client;

use crate::ui::context::UiContext;
use crate::ui::output::print_json;

/// Authenticate against the manager and print the JWT
pub fn cmd_auth(ui: &UiContext) -> Result<()> {
    let loaded = super::load_config(ui)?;
    let client = create_manager_client(&loaded.config)
        .context("failed to authenticate against the wazuh manager")?;

    if ui.json {
        print_json(&json!({ "event": "token", "token": client.token() }), true)?;
    } else {
        println!("{}", client.token());
    }
    Ok(())
}
