use ratatui::style::Color;

use crate::form::{Severity, Theme};

pub(crate) fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Blue => Color::Blue,
        Theme::Green => Color::Green,
        Theme::Purple => Color::Magenta,
        Theme::Orange => Color::LightRed,
        Theme::Red => Color::Red,
        Theme::Teal => Color::Cyan,
    }
}

pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}
