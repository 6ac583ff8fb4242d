use std::io::{self, Write};

use serde_json::Value;
use wazctl::config::LoadedConfig;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// Report unknown keys found while loading the config file
pub fn print_config_warnings(loaded: &LoadedConfig, ui: &UiContext) {
    if ui.json || loaded.warnings.is_empty() {
        return;
    }

    let mut block = WarningBlock::new(format!(
        "Unknown keys in {}",
        loaded.path.display()
    ));
    for w in &loaded.warnings {
        let location = match w.line {
            Some(line) => format!("'{}' (line {})", w.key, line),
            None => format!("'{}'", w.key),
        };
        match &w.suggestion {
            Some(suggestion) => block.add_line(format!("{}: did you mean '{}'?", location, suggestion)),
            None => block.add_line(location),
        }
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}

/// Print an API response as indented JSON (compact NDJSON with `--json`)
pub fn print_json(value: &Value, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let rendered = if json {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "{}", rendered)
}
