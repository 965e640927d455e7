use serde_json::Value;
use tracing::debug;

use super::draft::{Draft, Record};

/// Owns the working list of one embedded collection, the in-progress draft
/// and the edit cursor. These methods are the only mutators of that state.
///
/// `edit_cursor == None` means the draft describes a new item; `Some(i)` means
/// it is an edit of `items[i]`. The draft is never applied to `items` except
/// through [`append`](Self::append) and [`replace`](Self::replace).
#[derive(Debug, Clone)]
pub struct ArrayEditController<T> {
    items: Vec<T>,
    draft: Draft,
    edit_cursor: Option<usize>,
    revision: u64,
}

impl<T> Default for ArrayEditController<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: Draft::new(),
            edit_cursor: None,
            revision: 0,
        }
    }
}

impl<T: Record> ArrayEditController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    /// Bumped on every change to `items`; draft-only changes leave it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items_value(&self) -> Value {
        Value::Array(self.items.iter().map(Record::to_value).collect())
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
        self.draft.clear();
        self.edit_cursor = None;
        self.touch();
        debug!(len = self.items.len(), "appended item");
    }

    /// Out-of-range indices are ignored and leave every piece of state intact.
    pub fn replace(&mut self, index: usize, item: T) {
        let Some(slot) = self.items.get_mut(index) else {
            debug!(index, len = self.items.len(), "ignoring replace past end");
            return;
        };
        *slot = item;
        self.draft.clear();
        self.edit_cursor = None;
        self.touch();
        debug!(index, "replaced item");
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring remove past end");
            return;
        }
        self.items.remove(index);
        match self.edit_cursor {
            Some(cursor) if cursor == index => {
                self.edit_cursor = None;
                self.draft.clear();
            }
            // keep pointing at the same record after the shift
            Some(cursor) if cursor > index => self.edit_cursor = Some(cursor - 1),
            _ => {}
        }
        self.touch();
        debug!(index, len = self.items.len(), "removed item");
    }

    pub fn begin_edit(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            debug!(index, len = self.items.len(), "ignoring edit past end");
            return;
        };
        self.draft = item.to_draft();
        self.edit_cursor = Some(index);
        debug!(index, "editing item");
    }

    pub fn cancel_edit(&mut self) {
        self.edit_cursor = None;
        self.draft.clear();
    }

    pub fn set_draft_field(&mut self, name: impl Into<String>, value: Value) {
        self.draft.set(name, value);
    }

    /// Bulk load used when an existing parent record is opened.
    ///
    /// An in-range cursor and its draft are kept; a cursor the new list no
    /// longer reaches is cleared along with the draft.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.edit_cursor.is_some_and(|cursor| cursor >= self.items.len()) {
            debug!(len = self.items.len(), "edit cursor past new end; dropping draft");
            self.cancel_edit();
        }
        self.touch();
        debug!(len = self.items.len(), "loaded items");
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
