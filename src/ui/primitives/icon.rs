use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Progress,
    Pending,
    Arrow,
    Skip,
    Docker,
    Clean,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Skip) => theme::icons::SKIP,
            (true, Icon::Docker) => theme::icons::DOCKER,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Skip) => theme::icons_ascii::SKIP,
            (false, Icon::Docker) => theme::icons_ascii::DOCKER,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Warning | Icon::Progress | Icon::Clean => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow | Icon::Skip => theme::colors::DIM,
            Icon::Docker => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
