//! Rule command handlers

use std::path::Path;

use anyhow::Result;

use wazctl::application::{check_rule, scaffold_rule};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::CompleteEvent;
use crate::ui::primitives::icon::Icon;

pub fn cmd_rule_new(name: &str, force: bool, ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = scaffold_rule(&cwd, name, force)?;
    super::scaffold::report_created(
        "rule new",
        &path,
        "Describe your rule and its edge cases, then run `wazctl rule check`.",
        ui,
    )
}

pub fn cmd_rule_check(file: &Path, ui: &UiContext) -> Result<()> {
    let rule = check_rule(file)?;

    if ui.json {
        emit_event(&CompleteEvent::success("rule check").with_path(file.display().to_string()))?;
        return Ok(());
    }

    println!(
        "{} {} is valid: rule {} ({}), {} edge case{}",
        Icon::Success.colored(ui.color, ui.unicode),
        file.display(),
        rule.rule_id,
        rule.rule_name,
        rule.edges.len(),
        if rule.edges.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
