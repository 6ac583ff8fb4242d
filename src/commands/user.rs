//! User command handler

use anyhow::{Context, Result};

use wazctl::presentation::cli::Component;
use wazctl::presentation::factory::{create_indexer_client, create_manager_client};

use crate::ui::context::UiContext;
use crate::ui::output::print_json;

/// Create a user in the manager or the indexer and print the response
pub fn cmd_user_add(
    username: &str,
    password: &str,
    component: Component,
    role: Option<&str>,
    ui: &UiContext,
) -> Result<()> {
    let loaded = super::load_config(ui)?;

    let response = match component {
        Component::Wazuh => create_manager_client(&loaded.config)?
            .create_user(username, password)
            .with_context(|| format!("failed to create manager user '{}'", username))?,
        Component::Indexer => {
            let role = role.context("indexer users need a backend role; pass --role")?;
            create_indexer_client(&loaded.config)?
                .create_user(username, password, role)
                .with_context(|| format!("failed to create indexer user '{}'", username))?
        }
    };

    print_json(&response, ui.json)?;
    Ok(())
}
