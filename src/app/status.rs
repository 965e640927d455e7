#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press a to add, v to view, Ctrl+S to save.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn entry_added(&mut self, collection: &str, index: usize) {
        self.message = format!("Added {collection} #{}", index + 1);
    }

    pub fn entry_updated(&mut self, collection: &str, index: usize) {
        self.message = format!("Updated {collection} #{}", index + 1);
    }

    pub fn entry_removed(&mut self, collection: &str) {
        self.message = format!("Removed entry from {collection}");
    }

    pub fn delete_kept(&mut self) {
        self.message = "Delete cancelled".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "Record saved. Press Ctrl+Q to exit.".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
