use serde_json::Value;

use crate::{
    domain::FieldDescriptor,
    form::{
        CollectionEditorView, ConfirmRequest, ModalState, Record, RecordError, SaveOutcome,
        TextEdit,
    },
    presentation::PanelRender,
};

/// Object-safe view of one collection editor, so a single host can drive
/// editors over different record types.
pub trait CollectionPanel {
    fn title(&self) -> &str;
    fn revision(&self) -> u64;
    fn items_value(&self) -> Value;
    fn load_value(&mut self, field: &str, value: &Value) -> Result<(), RecordError>;

    fn modal(&self) -> ModalState;
    fn can_edit(&self) -> bool;
    fn can_view_list(&self) -> bool;
    fn focused_field(&self) -> Option<&FieldDescriptor>;

    fn open_add(&mut self) -> bool;
    fn open_list(&mut self) -> bool;
    fn save(&mut self) -> SaveOutcome;
    fn cancel(&mut self) -> bool;
    fn list_select(&mut self, delta: i32) -> bool;
    fn edit_selected(&mut self) -> bool;
    fn delete_selected(&mut self) -> Option<ConfirmRequest>;
    fn resolve_delete(&mut self, confirmed: bool) -> bool;
    fn focus_field(&mut self, delta: i32) -> bool;
    fn edit_focused(&mut self, edit: TextEdit) -> bool;
    fn cycle_focused(&mut self, delta: i32) -> bool;

    fn render_data(&self) -> PanelRender<'_>;
}

impl<T: Record> CollectionPanel for CollectionEditorView<T> {
    fn title(&self) -> &str {
        self.config().title()
    }

    fn revision(&self) -> u64 {
        self.controller().revision()
    }

    fn items_value(&self) -> Value {
        self.controller().items_value()
    }

    fn load_value(&mut self, field: &str, value: &Value) -> Result<(), RecordError> {
        let entries = match value {
            Value::Array(entries) => entries.as_slice(),
            Value::Null => &[],
            _ => return Err(RecordError::not_an_array(field)),
        };
        let items = entries
            .iter()
            .cloned()
            .map(T::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| RecordError::decode(field, err))?;
        self.set_items(items);
        Ok(())
    }

    fn modal(&self) -> ModalState {
        CollectionEditorView::modal(self)
    }

    fn can_edit(&self) -> bool {
        self.config().can_edit()
    }

    fn can_view_list(&self) -> bool {
        CollectionEditorView::can_view_list(self)
    }

    fn focused_field(&self) -> Option<&FieldDescriptor> {
        CollectionEditorView::focused_field(self)
    }

    fn open_add(&mut self) -> bool {
        CollectionEditorView::open_add(self)
    }

    fn open_list(&mut self) -> bool {
        CollectionEditorView::open_list(self)
    }

    fn save(&mut self) -> SaveOutcome {
        CollectionEditorView::save(self)
    }

    fn cancel(&mut self) -> bool {
        CollectionEditorView::cancel(self)
    }

    fn list_select(&mut self, delta: i32) -> bool {
        CollectionEditorView::list_select(self, delta)
    }

    fn edit_selected(&mut self) -> bool {
        CollectionEditorView::edit_selected(self)
    }

    fn delete_selected(&mut self) -> Option<ConfirmRequest> {
        CollectionEditorView::delete_selected(self)
    }

    fn resolve_delete(&mut self, confirmed: bool) -> bool {
        CollectionEditorView::resolve_delete(self, confirmed)
    }

    fn focus_field(&mut self, delta: i32) -> bool {
        CollectionEditorView::focus_field(self, delta)
    }

    fn edit_focused(&mut self, edit: TextEdit) -> bool {
        CollectionEditorView::edit_focused(self, edit)
    }

    fn cycle_focused(&mut self, delta: i32) -> bool {
        CollectionEditorView::cycle_focused(self, delta)
    }

    fn render_data(&self) -> PanelRender<'_> {
        let config = self.config();
        PanelRender {
            title: config.title(),
            icon: config.icon(),
            theme: config.theme(),
            can_edit: config.can_edit(),
            copy: config.copy(),
            descriptors: config.descriptors(),
            draft: self.draft(),
            modal: CollectionEditorView::modal(self),
            editing: self.controller().edit_cursor(),
            notice: self.notice(),
            valid: self.is_draft_valid(),
            warnings: self.format_warnings(),
            summaries: self.summaries(),
        }
    }
}
