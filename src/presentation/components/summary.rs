use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::view::PanelRender;
use super::accent;

const PANEL_HEIGHT: u16 = 5;

pub fn render_summary_panels(
    frame: &mut Frame<'_>,
    area: Rect,
    panels: &[PanelRender<'_>],
    focused: usize,
) {
    if panels.is_empty() {
        let placeholder = Paragraph::new("No collections attached")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let mut constraints = vec![Constraint::Length(PANEL_HEIGHT); panels.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, panel) in panels.iter().enumerate() {
        render_panel(frame, rows[index], panel, index == focused);
    }
}

fn render_panel(frame: &mut Frame<'_>, area: Rect, panel: &PanelRender<'_>, focused: bool) {
    let color = accent(panel.theme);
    let mut border = Style::default().fg(color);
    if focused {
        border = border.add_modifier(Modifier::BOLD);
    }
    let title = match panel.icon {
        Some(icon) => format!(" {icon} {} ({}) ", panel.title, panel.summaries.len()),
        None => format!(" {} ({}) ", panel.title, panel.summaries.len()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);

    let preview = match panel.summaries.last() {
        Some(summary) => Line::from(vec![
            Span::styled("latest: ", Style::default().fg(Color::DarkGray)),
            Span::raw(summary.headline.clone()),
        ]),
        None => Line::styled(
            panel.copy.empty_text.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut actions = Vec::new();
    if panel.can_edit {
        actions.push(action_span(&format!("[a] {}", panel.copy.add_label), focused));
    }
    if !panel.summaries.is_empty() {
        if !actions.is_empty() {
            actions.push(Span::raw("   "));
        }
        actions.push(action_span(
            &format!("[v] View ({})", panel.summaries.len()),
            focused,
        ));
    }

    let body = Paragraph::new(vec![preview, Line::from(actions)]).block(block);
    frame.render_widget(body, area);
}

fn action_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(label.to_string(), style)
}
