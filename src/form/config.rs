use std::borrow::Cow;

use crate::domain::DescriptorList;

use super::confirm::{ConfirmRequest, Severity};

/// Cosmetic accent for a collection's panel and modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
}

impl Theme {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "blue" => Some(Theme::Blue),
            "green" => Some(Theme::Green),
            "purple" => Some(Theme::Purple),
            "orange" => Some(Theme::Orange),
            "red" => Some(Theme::Red),
            "teal" => Some(Theme::Teal),
            _ => None,
        }
    }
}

/// Summary of one item shown in the list modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSummary {
    pub headline: String,
    pub details: Vec<String>,
}

impl ItemSummary {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            details: Vec::new(),
        }
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if !line.trim().is_empty() {
            self.details.push(line);
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct CollectionCopy {
    pub add_label: Cow<'static, str>,
    pub empty_text: Cow<'static, str>,
    pub delete: ConfirmRequest,
}

impl Default for CollectionCopy {
    fn default() -> Self {
        Self {
            add_label: Cow::Borrowed("Add"),
            empty_text: Cow::Borrowed("No entries yet"),
            delete: ConfirmRequest::new("Remove entry", "This entry will be removed.")
                .with_buttons("Remove", "Keep")
                .with_severity(Severity::Danger),
        }
    }
}

pub type SummaryFn<T> = Box<dyn Fn(&T, usize) -> ItemSummary>;

/// Per-collection configuration, supplied once when the editor is built.
pub struct CollectionConfig<T> {
    pub(crate) title: String,
    pub(crate) icon: Option<String>,
    pub(crate) theme: Theme,
    pub(crate) descriptors: DescriptorList,
    pub(crate) render: SummaryFn<T>,
    pub(crate) can_edit: bool,
    pub(crate) copy: CollectionCopy,
}

impl<T> CollectionConfig<T> {
    pub fn new(
        title: impl Into<String>,
        descriptors: DescriptorList,
        render: impl Fn(&T, usize) -> ItemSummary + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            icon: None,
            theme: Theme::default(),
            descriptors,
            render: Box::new(render),
            can_edit: true,
            copy: CollectionCopy::default(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_can_edit(mut self, can_edit: bool) -> Self {
        self.can_edit = can_edit;
        self
    }

    pub fn with_copy(mut self, copy: CollectionCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_add_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.copy.add_label = label.into();
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.copy.empty_text = text.into();
        self
    }

    pub fn with_delete_confirmation(mut self, request: ConfirmRequest) -> Self {
        self.copy.delete = request;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn descriptors(&self) -> &DescriptorList {
        &self.descriptors
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    pub fn copy(&self) -> &CollectionCopy {
        &self.copy
    }
}

impl<T> std::fmt::Debug for CollectionConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionConfig")
            .field("title", &self.title)
            .field("theme", &self.theme)
            .field("fields", &self.descriptors.len())
            .field("can_edit", &self.can_edit)
            .finish_non_exhaustive()
    }
}
