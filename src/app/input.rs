use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::TextEdit;

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Main,
    Form { multiline: bool, choice: bool },
    List,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Save,
    Quit,
    ResetStatus,
    NextPanel,
    PrevPanel,
    OpenAdd,
    OpenList,
    Cancel,
    SaveEntry,
    NextField,
    PrevField,
    Edit(TextEdit),
    Cycle(i32),
    ListSelect(i32),
    ListEdit,
    ListDelete,
    ConfirmToggle,
    ConfirmAccept,
    ConfirmAnswer(bool),
    None,
}

pub fn classify(context: InputContext, key: &KeyEvent) -> AppCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match context {
        InputContext::Main => classify_main(key, ctrl),
        InputContext::Form { multiline, choice } => classify_form(key, ctrl, multiline, choice),
        InputContext::List => classify_list(key, ctrl),
        InputContext::Confirm => classify_confirm(key),
    }
}

fn classify_main(key: &KeyEvent, ctrl: bool) -> AppCommand {
    if ctrl {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => AppCommand::Save,
            KeyCode::Char('q') | KeyCode::Char('Q') => AppCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => AppCommand::Quit,
            _ => AppCommand::None,
        };
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => AppCommand::NextPanel,
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => AppCommand::PrevPanel,
        KeyCode::Enter | KeyCode::Char('a') => AppCommand::OpenAdd,
        KeyCode::Char('v') | KeyCode::Char('l') => AppCommand::OpenList,
        KeyCode::Esc => AppCommand::ResetStatus,
        _ => AppCommand::None,
    }
}

fn classify_form(key: &KeyEvent, ctrl: bool, multiline: bool, choice: bool) -> AppCommand {
    if ctrl {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => AppCommand::SaveEntry,
            KeyCode::Char('u') | KeyCode::Char('U') => AppCommand::Edit(TextEdit::Clear),
            KeyCode::Char('c') | KeyCode::Char('C') => AppCommand::Cancel,
            _ => AppCommand::None,
        };
    }
    match key.code {
        KeyCode::Esc => AppCommand::Cancel,
        KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
        KeyCode::Enter if multiline => AppCommand::Edit(TextEdit::Newline),
        KeyCode::Enter => AppCommand::SaveEntry,
        KeyCode::Left if choice => AppCommand::Cycle(-1),
        KeyCode::Right | KeyCode::Char(' ') if choice => AppCommand::Cycle(1),
        KeyCode::Backspace => AppCommand::Edit(TextEdit::Backspace),
        KeyCode::Char(ch) if !choice => AppCommand::Edit(TextEdit::Insert(ch)),
        _ => AppCommand::None,
    }
}

fn classify_list(key: &KeyEvent, ctrl: bool) -> AppCommand {
    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => AppCommand::Cancel,
            _ => AppCommand::None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppCommand::ListSelect(-1),
        KeyCode::Down | KeyCode::Char('j') => AppCommand::ListSelect(1),
        KeyCode::Enter | KeyCode::Char('e') => AppCommand::ListEdit,
        KeyCode::Delete | KeyCode::Char('d') => AppCommand::ListDelete,
        KeyCode::Esc | KeyCode::Char('q') => AppCommand::Cancel,
        _ => AppCommand::None,
    }
}

fn classify_confirm(key: &KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            AppCommand::ConfirmToggle
        }
        KeyCode::Enter => AppCommand::ConfirmAccept,
        KeyCode::Char('y') | KeyCode::Char('Y') => AppCommand::ConfirmAnswer(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => AppCommand::ConfirmAnswer(false),
        _ => AppCommand::None,
    }
}

pub fn help_text(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "Tab/↑↓ switch collection • a add • v view • Ctrl+S save record • Ctrl+Q quit"
        }
        InputContext::Form { .. } => "Tab/↑↓ field • Ctrl+S/Enter save entry • Esc cancel",
        InputContext::List => "↑/↓ select • e edit • d delete • Esc close",
        InputContext::Confirm => "←/→ choose • Enter answer • y/n",
    }
}
