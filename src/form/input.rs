use serde_json::Value;

use crate::domain::{ChoiceOption, FieldDescriptor, FieldKind};

/// Input affordance synthesized from a field's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWidget<'a> {
    SingleLine,
    Date,
    Time,
    MultiLine,
    Select {
        options: &'a [ChoiceOption],
        allow_unselected: bool,
    },
}

impl<'a> InputWidget<'a> {
    pub fn for_field(field: &'a FieldDescriptor) -> Self {
        match &field.kind {
            FieldKind::Text | FieldKind::Url => InputWidget::SingleLine,
            FieldKind::Date => InputWidget::Date,
            FieldKind::Time => InputWidget::Time,
            FieldKind::LongText => InputWidget::MultiLine,
            FieldKind::Choice(options) => InputWidget::Select {
                options,
                allow_unselected: !field.required,
            },
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InputWidget::Date => Some("YYYY-MM-DD"),
            InputWidget::Time => Some("HH:MM"),
            InputWidget::Select { .. } => Some("←/→ choose"),
            InputWidget::MultiLine => Some("Enter adds a line"),
            InputWidget::SingleLine => None,
        }
    }

    fn accepts(&self, ch: char) -> bool {
        match self {
            InputWidget::Date => ch.is_ascii_digit() || ch == '-',
            InputWidget::Time => ch.is_ascii_digit() || ch == ':',
            InputWidget::SingleLine | InputWidget::MultiLine => !ch.is_control(),
            InputWidget::Select { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
}

/// Apply a text edit to the current draft value of a text-like field.
///
/// Returns the new value, or `None` when the edit does not apply.
pub fn apply_text_edit(widget: InputWidget<'_>, current: Option<&Value>, edit: TextEdit) -> Option<Value> {
    if matches!(widget, InputWidget::Select { .. }) {
        return None;
    }
    let mut buffer = match current {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    match edit {
        TextEdit::Insert(ch) if widget.accepts(ch) => buffer.push(ch),
        TextEdit::Insert(_) => return None,
        TextEdit::Newline if widget == InputWidget::MultiLine => buffer.push('\n'),
        TextEdit::Newline => return None,
        TextEdit::Backspace => {
            buffer.pop()?;
        }
        TextEdit::Clear => buffer.clear(),
    }
    Some(Value::String(buffer))
}

/// Step through a choice field's options; a non-required field has an extra
/// unselected slot that maps to `null`.
pub fn cycle_choice(widget: InputWidget<'_>, current: Option<&Value>, delta: i32) -> Option<Value> {
    let InputWidget::Select {
        options,
        allow_unselected,
    } = widget
    else {
        return None;
    };
    let offset = usize::from(allow_unselected);
    let slots = options.len() + offset;
    let position = current
        .and_then(Value::as_str)
        .and_then(|value| options.iter().position(|option| option.value == value))
        .map(|index| index + offset);
    let next = match position {
        Some(at) => (at as i64 + i64::from(delta)).rem_euclid(slots as i64) as usize,
        None if delta >= 0 => offset.min(slots - 1),
        None => slots - 1,
    };
    if allow_unselected && next == 0 {
        return Some(Value::Null);
    }
    options
        .get(next - offset)
        .map(|option| Value::String(option.value.clone()))
}

/// Human-readable draft value: choice fields show their label.
pub fn display_value(field: &FieldDescriptor, value: Option<&Value>) -> String {
    match (value, &field.kind) {
        (None | Some(Value::Null), FieldKind::Choice(_)) => "<unselected>".to_string(),
        (None | Some(Value::Null), _) => String::new(),
        (Some(Value::String(text)), FieldKind::Choice(options)) => options
            .iter()
            .find(|option| &option.value == text)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| text.clone()),
        (Some(Value::String(text)), _) => text.clone(),
        (Some(other), _) => other.to_string(),
    }
}
