use std::path::PathBuf;

use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed error with an optional source file and a suggested fix
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut p = Panel::with_title("ERROR").style(PanelStyle::Error);

        if let Some(file) = &self.file {
            p.add_line(file.display().to_string());
            p.add_empty();
        }
        p.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            p.add_empty();
            p.add_line(format!("FIX: {}", fix));
        }

        p.render(supports_color, supports_unicode)
    }
}
