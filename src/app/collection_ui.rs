use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::io::{OutputOptions, emit};

use super::{options::UiOptions, parent::ParentForm, runtime::App};

/// Entry point: runs the terminal editor over a parent record and its
/// embedded collections, returning the saved record.
pub struct CollectionUI {
    form: ParentForm,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl CollectionUI {
    pub fn new(form: ParentForm) -> Self {
        Self {
            form,
            title: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<Value> {
        let CollectionUI {
            form,
            title,
            options,
            output,
        } = self;

        info!(collections = form.len(), "starting editor");
        let mut app = App::new(form, options, title);
        let value = app.run()?;
        if let Some(output) = output {
            emit(&value, &output)?;
        }
        Ok(value)
    }
}
