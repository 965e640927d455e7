mod config;
mod confirm;
mod controller;
mod draft;
mod editor;
mod error;
mod input;
mod validation;

pub use config::{CollectionConfig, CollectionCopy, ItemSummary, Theme};
pub use confirm::{ConfirmRequest, ConfirmationService, Severity};
pub use controller::ArrayEditController;
pub use draft::{Draft, Record};
pub use editor::{CollectionEditorView, ModalState, SaveOutcome};
pub use error::RecordError;
pub use input::{InputWidget, TextEdit, display_value};
pub use validation::{FormatWarning, format_warnings, is_draft_valid, missing_required};
