use anyhow::{Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::form::RecordError;

use super::panel::CollectionPanel;

struct CollectionSlot {
    field: String,
    panel: Box<dyn CollectionPanel>,
    synced_revision: u64,
}

/// Aggregate parent record plus the collections embedded in it.
///
/// Each collection is mirrored into the record under its field name by
/// [`sync`](Self::sync). The mirror is one-way: the record is never read back
/// into a collection after it has been attached.
pub struct ParentForm {
    record: Map<String, Value>,
    slots: Vec<CollectionSlot>,
    dirty: bool,
}

impl Default for ParentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentForm {
    pub fn new() -> Self {
        Self {
            record: Map::new(),
            slots: Vec::new(),
            dirty: false,
        }
    }

    /// Open an existing record for editing.
    pub fn from_record(record: Value) -> Result<Self> {
        let Value::Object(record) = record else {
            bail!("parent record must be a JSON object");
        };
        Ok(Self {
            record,
            ..Self::new()
        })
    }

    /// Attach a collection under `field`, pre-populating it from the record
    /// when the record already carries that field.
    pub fn attach(
        &mut self,
        field: impl Into<String>,
        mut panel: impl CollectionPanel + 'static,
    ) -> Result<(), RecordError> {
        let field = field.into();
        if let Some(existing) = self.record.get(&field) {
            panel.load_value(&field, existing)?;
        }
        self.record.insert(field.clone(), panel.items_value());
        debug!(field = %field, revision = panel.revision(), "attached collection");
        self.slots.push(CollectionSlot {
            synced_revision: panel.revision(),
            field,
            panel: Box::new(panel),
        });
        Ok(())
    }

    pub fn with_collection(
        mut self,
        field: impl Into<String>,
        panel: impl CollectionPanel + 'static,
    ) -> Result<Self, RecordError> {
        self.attach(field, panel)?;
        Ok(self)
    }

    /// Copy every collection whose items changed since the last sync into the
    /// record. Returns whether anything was copied.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        for slot in &mut self.slots {
            let revision = slot.panel.revision();
            if revision == slot.synced_revision {
                continue;
            }
            self.record
                .insert(slot.field.clone(), slot.panel.items_value());
            slot.synced_revision = revision;
            changed = true;
            debug!(field = %slot.field, revision, "mirrored collection into record");
        }
        if changed {
            self.dirty = true;
        }
        changed
    }

    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.record.clone())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn field_name(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.field.as_str())
    }

    pub fn panel(&self, index: usize) -> Option<&dyn CollectionPanel> {
        self.slots.get(index).map(|slot| slot.panel.as_ref())
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut (dyn CollectionPanel + 'static)> {
        self.slots.get_mut(index).map(|slot| slot.panel.as_mut())
    }

    pub fn panels(&self) -> impl Iterator<Item = &dyn CollectionPanel> {
        self.slots.iter().map(|slot| slot.panel.as_ref())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
