use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Modal sized as a share of the screen, never below the given minimums.
pub fn modal_rect(area: Rect, width_pct: u16, min_width: u16, min_height: u16) -> Rect {
    let width = (area.width.saturating_mul(width_pct) / 100).max(min_width);
    let height = area.height.saturating_sub(area.height / 5).max(min_height);
    popup_rect(area, width, height)
}
