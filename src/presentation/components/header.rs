use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: Option<&str>, dirty: bool) {
    let mut spans = vec![Span::styled(
        title.unwrap_or("Record").to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if dirty {
        spans.push(Span::styled(
            "  • unsaved changes",
            Style::default().fg(Color::Yellow),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}
