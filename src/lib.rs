#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod presentation;

#[cfg(test)]
mod tests;

pub use app::{CollectionPanel, CollectionUI, ParentForm, UiOptions};
pub use domain::{
    ChoiceOption, DescriptorError, DescriptorList, FieldDescriptor, FieldKind,
    parse_descriptor_sets, parse_descriptors,
};
pub use form::{
    ArrayEditController, CollectionConfig, CollectionCopy, CollectionEditorView, ConfirmRequest,
    ConfirmationService, Draft, FormatWarning, InputWidget, ItemSummary, ModalState, Record,
    RecordError, SaveOutcome, Severity, TextEdit, Theme, format_warnings, is_draft_valid,
    missing_required,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, parse_document_str, read_document,
};
pub use presentation::{ConfirmRender, PanelRender, UiContext, draw};

pub mod prelude {
    pub use super::{
        CollectionConfig, CollectionEditorView, CollectionPanel, CollectionUI, ConfirmRequest,
        DescriptorList, FieldDescriptor, ItemSummary, ModalState, ParentForm, Record, SaveOutcome,
        TextEdit, UiOptions, parse_descriptors,
    };
}
