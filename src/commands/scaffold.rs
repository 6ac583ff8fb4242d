//! Config scaffold command handler

use std::path::Path;

use anyhow::Result;

use wazctl::application::scaffold_config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::CompleteEvent;
use crate::ui::primitives::icon::Icon;

/// Write `.wazctl.yaml` into the current directory
pub fn cmd_config(force: bool, ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = scaffold_config(&cwd, force)?;
    report_created("config", &path, "Edit it with your manager and indexer endpoints.", ui)
}

pub(crate) fn report_created(command: &str, path: &Path, hint: &str, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&CompleteEvent::success(command).with_path(path.display().to_string()))?;
        return Ok(());
    }

    println!(
        "{} Created {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    println!("  {}", hint);
    Ok(())
}
