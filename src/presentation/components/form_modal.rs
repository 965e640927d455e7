use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::FieldDescriptor,
    form::{InputWidget, display_value},
};

use super::super::view::PanelRender;
use super::{accent, layout::modal_rect};

pub fn render_form_modal(frame: &mut Frame<'_>, panel: &PanelRender<'_>, focus: usize, hints: bool) {
    let area = modal_rect(frame.area(), 70, 40, 12);
    frame.render_widget(Clear, area);

    let title = match panel.editing {
        Some(index) => format!(" Edit {} #{} ", panel.title, index + 1),
        None => format!(" {} – {} ", panel.copy.add_label, panel.title),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(accent(panel.theme))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let mut lines = Vec::new();
    let mut focus_line = 0usize;
    for (index, field) in panel.descriptors.iter().enumerate() {
        let focused = index == focus;
        if focused {
            focus_line = lines.len();
        }
        let width = field_width(field, rows[0].width);
        lines.extend(field_lines(panel, field, focused, hints, width));
    }
    let visible = rows[0].height.saturating_sub(1) as usize;
    let scroll = focus_line.saturating_sub(visible.saturating_sub(4)) as u16;
    let fields = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(fields, rows[0]);

    let mut footer = Vec::new();
    if let Some(notice) = panel.notice {
        footer.push(Line::styled(notice.to_string(), Style::default().fg(Color::Red)));
    }
    let save_style = if panel.valid {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    footer.push(Line::from(vec![
        Span::styled("Ctrl+S save", save_style),
        Span::raw(" • Esc cancel • Tab next field"),
    ]));
    let footer = Paragraph::new(footer)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, rows[1]);
}

fn field_lines(
    panel: &PanelRender<'_>,
    field: &FieldDescriptor,
    focused: bool,
    hints: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let widget = InputWidget::for_field(field);
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut label = vec![Span::styled(field.display_label(), label_style)];
    if let Some(hint) = widget.hint() {
        label.push(Span::styled(
            format!("  ({hint})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut lines = vec![Line::from(label)];

    let raw = panel.draft.get(&field.name);
    let value = display_value(field, raw);
    let marker = if focused { "» " } else { "  " };
    let value_style = Style::default().fg(Color::White);
    match widget {
        InputWidget::Select { .. } => {
            let value = fit_tail(&value, width.saturating_sub(4));
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("◂ {value} ▸"), value_style),
            ]));
        }
        InputWidget::MultiLine => {
            let mut text_lines = value
                .split('\n')
                .flat_map(|line| wrap_line(line, width.saturating_sub(1)))
                .collect::<Vec<_>>();
            if text_lines.is_empty() {
                text_lines.push(String::new());
            }
            let last = text_lines.len() - 1;
            for (index, text) in text_lines.into_iter().enumerate() {
                let cursor = if focused && index == last { "▏" } else { "" };
                let prefix = if index == 0 { marker } else { "  " };
                lines.push(Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(format!("{text}{cursor}"), value_style),
                ]));
            }
        }
        InputWidget::SingleLine | InputWidget::Date | InputWidget::Time => {
            let shown = if value.is_empty() && !focused {
                Span::styled(
                    field.placeholder.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                let cursor = if focused { "▏" } else { "" };
                let value = fit_tail(&value, width.saturating_sub(1));
                Span::styled(format!("{value}{cursor}"), value_style)
            };
            lines.push(Line::from(vec![Span::raw(marker), shown]));
        }
    }

    if hints
        && let Some(warning) = panel
            .warnings
            .iter()
            .find(|warning| warning.field == field.name)
    {
        lines.push(Line::styled(
            format!("  ⚠ {}", warning.message),
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::default());
    lines
}

/// Columns a field's value may use inside the form body. Fields not marked
/// full-width get half the row.
fn field_width(field: &FieldDescriptor, body_width: u16) -> usize {
    let body = usize::from(body_width).saturating_sub(2);
    if field.full_width {
        body
    } else {
        (body / 2).max(MIN_FIELD_WIDTH).min(body)
    }
}

const MIN_FIELD_WIDTH: usize = 16;

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(line, width.max(1))
        .into_iter()
        .map(|part| part.into_owned())
        .collect()
}

/// Keeps the end of `value` visible, where the cursor sits.
fn fit_tail(value: &str, width: usize) -> String {
    if UnicodeWidthStr::width(value) <= width {
        return value.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        start = index;
    }
    format!("…{}", &value[start..])
}
