mod collection_ui;
mod confirm;
pub(crate) mod input;
mod options;
mod panel;
mod parent;
pub(crate) mod runtime;
mod status;
mod terminal;

pub use collection_ui::CollectionUI;
pub use options::UiOptions;
pub use panel::CollectionPanel;
pub use parent::ParentForm;
