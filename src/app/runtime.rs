use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde_json::Value;
use tracing::debug;

use crate::{
    form::{InputWidget, ModalState, SaveOutcome},
    presentation::{self, UiContext},
};

use super::{
    confirm::ConfirmDialog,
    input::{AppCommand, InputContext, classify, help_text},
    options::UiOptions,
    parent::ParentForm,
    panel::CollectionPanel,
    status::StatusLine,
    terminal::Screen,
};

pub(crate) struct App {
    form: ParentForm,
    options: UiOptions,
    title: Option<String>,
    status: StatusLine,
    focused: usize,
    confirm: Option<ConfirmDialog>,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    pub fn new(form: ParentForm, options: UiOptions, title: Option<String>) -> Self {
        Self {
            form,
            options,
            title,
            status: StatusLine::new(),
            focused: 0,
            confirm: None,
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<Value> {
        let mut screen = Screen::enter()?;
        while !self.should_quit {
            screen.render(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => screen.fit(width, height)?,
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without saving"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let context = self.context();
        let help = self.options.show_help.then(|| help_text(context));
        presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                panels: self.form.panels().map(|panel| panel.render_data()).collect(),
                focused: self.focused,
                status_message: self.status.message(),
                dirty: self.form.is_dirty(),
                help,
                format_hints: self.options.format_hints,
                confirm: self.confirm.as_ref().map(ConfirmDialog::as_render),
            },
        );
    }

    fn context(&self) -> InputContext {
        let Some(panel) = self.form.panel(self.focused) else {
            return InputContext::Main;
        };
        match panel.modal() {
            ModalState::Closed => InputContext::Main,
            ModalState::List { .. } => InputContext::List,
            ModalState::Confirm { .. } => InputContext::Confirm,
            ModalState::Form { .. } => {
                let widget = panel.focused_field().map(InputWidget::for_field);
                InputContext::Form {
                    multiline: matches!(widget, Some(InputWidget::MultiLine)),
                    choice: matches!(widget, Some(InputWidget::Select { .. })),
                }
            }
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let command = classify(self.context(), &key);
        self.dispatch(command);
        if self.form.sync() {
            self.exit_armed = false;
        }
    }

    fn dispatch(&mut self, command: AppCommand) {
        match command {
            AppCommand::Save => self.on_save(),
            AppCommand::Quit => self.on_exit(),
            AppCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            AppCommand::NextPanel => self.step_focus(1),
            AppCommand::PrevPanel => self.step_focus(-1),
            AppCommand::OpenAdd => self.with_panel(|panel, status| {
                if panel.open_add() {
                    status.editing(&format!("new {}", panel.title()));
                } else if !panel.can_edit() {
                    status.set_raw(format!("{} is read-only", panel.title()));
                }
            }),
            AppCommand::OpenList => self.with_panel(|panel, status| {
                if !panel.open_list() {
                    status.set_raw(format!("{} has no entries", panel.title()));
                }
            }),
            AppCommand::Cancel => self.with_panel(|panel, status| {
                if panel.cancel() {
                    status.ready();
                }
            }),
            AppCommand::SaveEntry => self.with_panel(|panel, status| match panel.save() {
                SaveOutcome::Appended(index) => status.entry_added(panel.title(), index),
                SaveOutcome::Replaced(index) => status.entry_updated(panel.title(), index),
                SaveOutcome::Invalid { .. } => status.set_raw("Fill in the required fields"),
                SaveOutcome::Rejected(message) => status.set_raw(message),
                SaveOutcome::NotOpen => {}
            }),
            AppCommand::NextField => self.with_panel(|panel, _| {
                panel.focus_field(1);
            }),
            AppCommand::PrevField => self.with_panel(|panel, _| {
                panel.focus_field(-1);
            }),
            AppCommand::Edit(edit) => self.with_panel(|panel, _| {
                panel.edit_focused(edit);
            }),
            AppCommand::Cycle(delta) => self.with_panel(|panel, _| {
                panel.cycle_focused(delta);
            }),
            AppCommand::ListSelect(delta) => self.with_panel(|panel, _| {
                panel.list_select(delta);
            }),
            AppCommand::ListEdit => self.with_panel(|panel, status| {
                if panel.edit_selected() {
                    status.editing(panel.title());
                }
            }),
            AppCommand::ListDelete => {
                let request = self
                    .form
                    .panel_mut(self.focused)
                    .and_then(|panel| panel.delete_selected());
                if let Some(request) = request {
                    self.status.set_raw(request.title.clone());
                    self.confirm = Some(ConfirmDialog::new(request));
                }
            }
            AppCommand::ConfirmToggle => {
                if let Some(dialog) = &mut self.confirm {
                    dialog.toggle();
                }
            }
            AppCommand::ConfirmAccept => {
                let answer = self.confirm.as_ref().is_some_and(ConfirmDialog::answer);
                self.finish_confirm(answer);
            }
            AppCommand::ConfirmAnswer(answer) => self.finish_confirm(answer),
            AppCommand::None => {}
        }
    }

    fn finish_confirm(&mut self, confirmed: bool) {
        self.confirm = None;
        self.with_panel(|panel, status| {
            if panel.resolve_delete(confirmed) {
                status.entry_removed(panel.title());
            } else {
                status.delete_kept();
            }
        });
    }

    fn with_panel(
        &mut self,
        apply: impl FnOnce(&mut (dyn CollectionPanel + 'static), &mut StatusLine),
    ) {
        if let Some(panel) = self.form.panel_mut(self.focused) {
            apply(panel, &mut self.status);
        }
    }

    fn step_focus(&mut self, delta: i32) {
        let count = self.form.len() as i64;
        if count == 0 {
            return;
        }
        self.focused = (self.focused as i64 + i64::from(delta)).rem_euclid(count) as usize;
        debug!(focused = self.focused, "focused collection");
    }

    fn on_save(&mut self) {
        self.result = Some(self.form.to_value());
        self.form.mark_saved();
        self.exit_armed = false;
        self.status.saved();
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn form_for_test(&self) -> &ParentForm {
        &self.form
    }

    pub(crate) fn status_for_test(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn result_for_test(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub(crate) fn should_quit_for_test(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn has_confirm_for_test(&self) -> bool {
        self.confirm.is_some()
    }
}
