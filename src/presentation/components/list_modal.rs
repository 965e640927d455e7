use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::form::ItemSummary;

use super::super::view::PanelRender;
use super::{accent, layout::modal_rect};

pub fn render_list_modal(frame: &mut Frame<'_>, panel: &PanelRender<'_>, selected: usize) {
    let area = modal_rect(frame.area(), 70, 40, 10);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ({}) ", panel.title, panel.summaries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(panel.theme)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let width = rows[0].width.saturating_sub(4).max(10) as usize;
    let items: Vec<ListItem<'static>> = if panel.summaries.is_empty() {
        vec![ListItem::new(panel.copy.empty_text.to_string())]
    } else {
        panel
            .summaries
            .iter()
            .enumerate()
            .map(|(index, summary)| summary_item(index, summary, width))
            .collect()
    };
    let mut state = ListState::default();
    if !panel.summaries.is_empty() {
        state.select(Some(selected.min(panel.summaries.len() - 1)));
    }
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, rows[0], &mut state);

    let controls = if panel.can_edit {
        "↑/↓ select • e edit • d delete • Esc close"
    } else {
        "↑/↓ select • Esc close"
    };
    let footer = Paragraph::new(Line::styled(controls, Style::default().fg(Color::Yellow)))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, rows[1]);
}

fn summary_item(index: usize, summary: &ItemSummary, width: usize) -> ListItem<'static> {
    let headline = format!("#{} {}", index + 1, summary.headline);
    let mut lines = vec![Line::from(Span::styled(
        truncate(&headline, width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for detail in &summary.details {
        for wrapped in textwrap::wrap(detail, width.saturating_sub(3).max(1)) {
            lines.push(Line::styled(
                format!("   {wrapped}"),
                Style::default().fg(Color::Gray),
            ));
        }
    }
    ListItem::new(lines)
}

fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}
