use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FieldDescriptor, FieldKind};

use super::{
    config::{CollectionConfig, ItemSummary},
    confirm::{ConfirmRequest, ConfirmationService},
    controller::ArrayEditController,
    draft::{Draft, Record},
    input::{InputWidget, TextEdit, apply_text_edit, cycle_choice},
    validation::{FormatWarning, format_warnings, is_draft_valid, missing_notice, missing_required},
};

/// Which modal, if any, the editor is showing. Only one can be open at a
/// time, so an item can never be deleted while it is open in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Form {
        focus: usize,
    },
    List {
        selected: usize,
    },
    Confirm {
        index: usize,
        from_list: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Appended(usize),
    Replaced(usize),
    Invalid { missing: Vec<String> },
    Rejected(String),
    NotOpen,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Appended(_) | SaveOutcome::Replaced(_))
    }
}

/// Descriptor-driven editor for one embedded collection.
///
/// Every user action is mediated here and reaches the controller only after
/// its precondition holds: saves pass the required-field gate, deletes pass
/// the confirmation prompt.
pub struct CollectionEditorView<T> {
    config: CollectionConfig<T>,
    controller: ArrayEditController<T>,
    modal: ModalState,
    notice: Option<String>,
}

impl<T: Record> CollectionEditorView<T> {
    pub fn new(config: CollectionConfig<T>) -> Self {
        Self {
            config,
            controller: ArrayEditController::new(),
            modal: ModalState::Closed,
            notice: None,
        }
    }

    pub fn with_items(config: CollectionConfig<T>, items: Vec<T>) -> Self {
        Self {
            controller: ArrayEditController::with_items(items),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &CollectionConfig<T> {
        &self.config
    }

    pub fn controller(&self) -> &ArrayEditController<T> {
        &self.controller
    }

    pub fn items(&self) -> &[T] {
        self.controller.items()
    }

    pub fn draft(&self) -> &Draft {
        self.controller.draft()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Replace the whole collection. An open form is closed and its draft
    /// discarded, since its index may now name a different record.
    pub fn set_items(&mut self, items: Vec<T>) {
        if matches!(self.modal, ModalState::Form { .. }) {
            self.controller.cancel_edit();
            self.notice = None;
        }
        self.controller.set_items(items);
        self.modal = match self.modal {
            ModalState::List { selected } if !self.controller.is_empty() => ModalState::List {
                selected: selected.min(self.controller.len() - 1),
            },
            _ => ModalState::Closed,
        };
    }

    pub fn is_draft_valid(&self) -> bool {
        is_draft_valid(&self.config.descriptors, self.controller.draft())
    }

    pub fn missing_fields(&self) -> Vec<&FieldDescriptor> {
        missing_required(&self.config.descriptors, self.controller.draft())
    }

    pub fn format_warnings(&self) -> Vec<FormatWarning> {
        format_warnings(&self.config.descriptors, self.controller.draft())
    }

    pub fn can_view_list(&self) -> bool {
        !self.controller.is_empty()
    }

    pub fn summaries(&self) -> Vec<ItemSummary> {
        self.controller
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| (self.config.render)(item, index))
            .collect()
    }

    /// Open the form for a new item. Any leftover draft is discarded.
    pub fn open_add(&mut self) -> bool {
        if !self.config.can_edit || !self.modal_allows_form() {
            return false;
        }
        self.controller.cancel_edit();
        self.modal = ModalState::Form { focus: 0 };
        self.notice = None;
        debug!(collection = %self.config.title, "opened add form");
        true
    }

    pub fn open_edit(&mut self, index: usize) -> bool {
        if !self.config.can_edit || !self.modal_allows_form() || index >= self.controller.len() {
            return false;
        }
        self.controller.begin_edit(index);
        self.modal = ModalState::Form { focus: 0 };
        self.notice = None;
        debug!(collection = %self.config.title, index, "opened edit form");
        true
    }

    pub fn change_field(&mut self, name: &str, value: Value) -> bool {
        if !matches!(self.modal, ModalState::Form { .. }) {
            return false;
        }
        let Some(field) = self.config.descriptors.get(name) else {
            warn!(collection = %self.config.title, field = name, "unknown field");
            return false;
        };
        if !accepts_choice(field, &value) {
            warn!(
                collection = %self.config.title,
                field = name,
                value = %value,
                "value is not one of the field's choices"
            );
            return false;
        }
        self.controller.set_draft_field(name, value);
        if self.notice.is_some() && self.is_draft_valid() {
            self.notice = None;
        }
        true
    }

    pub fn save(&mut self) -> SaveOutcome {
        if !matches!(self.modal, ModalState::Form { .. }) {
            return SaveOutcome::NotOpen;
        }
        let missing = missing_required(&self.config.descriptors, self.controller.draft());
        if !missing.is_empty() {
            let names = missing.iter().map(|field| field.name.clone()).collect::<Vec<_>>();
            self.notice = Some(missing_notice(&missing));
            warn!(collection = %self.config.title, missing = ?names, "save refused");
            return SaveOutcome::Invalid { missing: names };
        }
        let item = match T::from_draft(self.controller.draft()) {
            Ok(item) => item,
            Err(err) => {
                let message = format!("Entry could not be saved: {err}");
                warn!(collection = %self.config.title, error = %err, "draft rejected");
                self.notice = Some(message.clone());
                return SaveOutcome::Rejected(message);
            }
        };
        let outcome = match self.controller.edit_cursor() {
            None => {
                self.controller.append(item);
                SaveOutcome::Appended(self.controller.len() - 1)
            }
            Some(index) if index < self.controller.len() => {
                self.controller.replace(index, item);
                SaveOutcome::Replaced(index)
            }
            Some(index) => {
                self.controller.cancel_edit();
                self.modal = ModalState::Closed;
                let message = format!("Entry #{} no longer exists", index + 1);
                self.notice = Some(message.clone());
                return SaveOutcome::Rejected(message);
            }
        };
        self.modal = ModalState::Closed;
        self.notice = None;
        outcome
    }

    /// Close whatever modal is open. Closing the form discards the draft;
    /// closing the prompt answers "no".
    pub fn cancel(&mut self) -> bool {
        match self.modal {
            ModalState::Closed => false,
            ModalState::Form { .. } => {
                self.controller.cancel_edit();
                self.modal = ModalState::Closed;
                self.notice = None;
                true
            }
            ModalState::List { .. } => {
                self.modal = ModalState::Closed;
                true
            }
            ModalState::Confirm { .. } => {
                self.resolve_delete(false);
                true
            }
        }
    }

    /// Suspend a delete pending confirmation. The returned request is what the
    /// confirmation collaborator should show; answer with
    /// [`resolve_delete`](Self::resolve_delete).
    pub fn request_delete(&mut self, index: usize) -> Option<ConfirmRequest> {
        if !self.config.can_edit || index >= self.controller.len() {
            return None;
        }
        let from_list = match self.modal {
            ModalState::Closed => false,
            ModalState::List { .. } => true,
            ModalState::Form { .. } | ModalState::Confirm { .. } => return None,
        };
        self.modal = ModalState::Confirm { index, from_list };
        Some(self.delete_request(index))
    }

    pub fn resolve_delete(&mut self, confirmed: bool) -> bool {
        let ModalState::Confirm { index, from_list } = self.modal else {
            return false;
        };
        let removed = confirmed && index < self.controller.len();
        if removed {
            self.controller.remove(index);
        }
        debug!(collection = %self.config.title, index, confirmed, "delete resolved");
        self.modal = if from_list && !self.controller.is_empty() {
            ModalState::List {
                selected: index.min(self.controller.len() - 1),
            }
        } else {
            ModalState::Closed
        };
        removed
    }

    /// Ask `service` exactly once and delete only when it answers `true`.
    pub fn delete_with(&mut self, service: &mut impl ConfirmationService, index: usize) -> bool {
        let Some(request) = self.request_delete(index) else {
            return false;
        };
        let confirmed = service.confirm(&request);
        self.resolve_delete(confirmed)
    }

    pub fn open_list(&mut self) -> bool {
        if self.controller.is_empty() {
            return false;
        }
        match self.modal {
            ModalState::Closed => {
                self.modal = ModalState::List { selected: 0 };
                true
            }
            ModalState::List { .. } => true,
            ModalState::Form { .. } | ModalState::Confirm { .. } => false,
        }
    }

    pub fn list_select(&mut self, delta: i32) -> bool {
        let ModalState::List { selected } = self.modal else {
            return false;
        };
        let last = self.controller.len().saturating_sub(1) as i64;
        let next = (selected as i64 + i64::from(delta)).clamp(0, last) as usize;
        self.modal = ModalState::List { selected: next };
        next != selected
    }

    pub fn edit_selected(&mut self) -> bool {
        match self.modal {
            ModalState::List { selected } => self.open_edit(selected),
            _ => false,
        }
    }

    pub fn delete_selected(&mut self) -> Option<ConfirmRequest> {
        match self.modal {
            ModalState::List { selected } => self.request_delete(selected),
            _ => None,
        }
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        match self.modal {
            ModalState::Form { focus } => self.config.descriptors.get_index(focus),
            _ => None,
        }
    }

    pub fn focus_field(&mut self, delta: i32) -> bool {
        let ModalState::Form { focus } = self.modal else {
            return false;
        };
        let count = self.config.descriptors.len() as i64;
        let next = (focus as i64 + i64::from(delta)).rem_euclid(count) as usize;
        self.modal = ModalState::Form { focus: next };
        next != focus
    }

    pub fn edit_focused(&mut self, edit: TextEdit) -> bool {
        let Some((name, value)) = self.focused_field().and_then(|field| {
            let current = self.controller.draft().get(&field.name);
            apply_text_edit(InputWidget::for_field(field), current, edit)
                .map(|value| (field.name.clone(), value))
        }) else {
            return false;
        };
        self.change_field(&name, value)
    }

    pub fn cycle_focused(&mut self, delta: i32) -> bool {
        let Some((name, value)) = self.focused_field().and_then(|field| {
            let current = self.controller.draft().get(&field.name);
            cycle_choice(InputWidget::for_field(field), current, delta)
                .map(|value| (field.name.clone(), value))
        }) else {
            return false;
        };
        self.change_field(&name, value)
    }

    fn modal_allows_form(&self) -> bool {
        matches!(self.modal, ModalState::Closed | ModalState::List { .. })
    }

    fn delete_request(&self, index: usize) -> ConfirmRequest {
        let mut request = self.config.copy.delete.clone();
        if let Some(item) = self.controller.get(index) {
            let summary = (self.config.render)(item, index);
            if !summary.headline.is_empty() {
                request.message = format!("{}\n\n{}", request.message, summary.headline);
            }
        }
        request
    }
}

/// Choice fields only take one of their option values, or `null` when the
/// field is optional. Other kinds accept anything.
fn accepts_choice(field: &FieldDescriptor, value: &Value) -> bool {
    let FieldKind::Choice(options) = &field.kind else {
        return true;
    };
    match value {
        Value::Null => !field.required,
        Value::String(text) => options.iter().any(|option| &option.value == text),
        _ => false,
    }
}

impl<T> std::fmt::Debug for CollectionEditorView<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionEditorView")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("modal", &self.modal)
            .field("notice", &self.notice)
            .finish()
    }
}
