mod app;
mod domain;
mod form;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{DescriptorList, FieldDescriptor},
    form::{CollectionConfig, CollectionEditorView, ItemSummary},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Link {
    pub titulo: String,
    pub link: String,
}

impl Link {
    pub(crate) fn new(titulo: &str, link: &str) -> Self {
        Self {
            titulo: titulo.to_string(),
            link: link.to_string(),
        }
    }
}

pub(crate) fn link_descriptors() -> DescriptorList {
    DescriptorList::new(vec![
        FieldDescriptor::text("titulo", "Título").required(),
        FieldDescriptor::url("link", "Link").required(),
    ])
    .expect("link descriptors")
}

pub(crate) fn link_config() -> CollectionConfig<Link> {
    CollectionConfig::new("Links", link_descriptors(), |link: &Link, _| {
        ItemSummary::new(link.titulo.clone()).detail(link.link.clone())
    })
}

pub(crate) fn link_editor() -> CollectionEditorView<Link> {
    CollectionEditorView::new(link_config())
}
