use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    domain::DescriptorList,
    form::{CollectionCopy, ConfirmRequest, Draft, FormatWarning, ItemSummary, ModalState, Theme},
};

use super::components::{
    render_confirm_dialog, render_footer, render_form_modal, render_header, render_list_modal,
    render_summary_panels,
};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub panels: Vec<PanelRender<'a>>,
    pub focused: usize,
    pub status_message: &'a str,
    pub dirty: bool,
    pub help: Option<&'a str>,
    pub format_hints: bool,
    pub confirm: Option<ConfirmRender<'a>>,
}

/// Everything needed to draw one collection: its summary card and,
/// when open, its modal.
pub struct PanelRender<'a> {
    pub title: &'a str,
    pub icon: Option<&'a str>,
    pub theme: Theme,
    pub can_edit: bool,
    pub copy: &'a CollectionCopy,
    pub descriptors: &'a DescriptorList,
    pub draft: &'a Draft,
    pub modal: ModalState,
    pub editing: Option<usize>,
    pub notice: Option<&'a str>,
    pub valid: bool,
    pub warnings: Vec<FormatWarning>,
    pub summaries: Vec<ItemSummary>,
}

pub struct ConfirmRender<'a> {
    pub request: &'a ConfirmRequest,
    pub confirm_selected: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ctx.title, ctx.dirty);
    render_summary_panels(frame, chunks[1], &ctx.panels, ctx.focused);
    render_footer(frame, chunks[2], &ctx);

    let Some(panel) = ctx.panels.get(ctx.focused) else {
        return;
    };
    match panel.modal {
        ModalState::Closed => {}
        ModalState::Form { focus } => render_form_modal(frame, panel, focus, ctx.format_hints),
        ModalState::List { selected } => render_list_modal(frame, panel, selected),
        ModalState::Confirm { .. } => {
            if let Some(confirm) = &ctx.confirm {
                render_confirm_dialog(frame, confirm);
            }
        }
    }
}
