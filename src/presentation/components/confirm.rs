use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::view::ConfirmRender;
use super::{layout::popup_rect, severity_color};

pub fn render_confirm_dialog(frame: &mut Frame<'_>, confirm: &ConfirmRender<'_>) {
    let request = confirm.request;
    let width = frame.area().width.saturating_sub(4).clamp(20, 56);
    let wrapped = textwrap::wrap(&request.message, width.saturating_sub(4) as usize);
    let height = (wrapped.len() as u16).saturating_add(6);
    let area = popup_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let color = severity_color(request.severity);
    let block = Block::default()
        .title(format!(" {} ", request.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let message = Paragraph::new(request.message.clone()).wrap(Wrap { trim: false });
    frame.render_widget(message, rows[0]);

    let active = Style::default()
        .fg(Color::Black)
        .bg(color)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::Gray);
    let (confirm_style, cancel_style) = if confirm.confirm_selected {
        (active, idle)
    } else {
        (idle, active)
    };
    let buttons = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", request.confirm_text), confirm_style),
        Span::raw("   "),
        Span::styled(format!(" {} ", request.cancel_text), cancel_style),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(buttons, rows[1]);
}
