use crate::{form::ConfirmRequest, presentation::ConfirmRender};

/// In-terminal confirmation prompt. The cancel button starts focused.
pub(crate) struct ConfirmDialog {
    request: ConfirmRequest,
    confirm_selected: bool,
}

impl ConfirmDialog {
    pub(crate) fn new(request: ConfirmRequest) -> Self {
        Self {
            request,
            confirm_selected: false,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.confirm_selected = !self.confirm_selected;
    }

    pub(crate) fn answer(&self) -> bool {
        self.confirm_selected
    }

    pub(crate) fn as_render(&self) -> ConfirmRender<'_> {
        ConfirmRender {
            request: &self.request,
            confirm_selected: self.confirm_selected,
        }
    }
}
