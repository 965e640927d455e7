mod confirm;
mod footer;
mod form_modal;
mod header;
mod layout;
mod list_modal;
mod summary;
mod theme;

pub use confirm::render_confirm_dialog;
pub use footer::render_footer;
pub use form_modal::render_form_modal;
pub use header::render_header;
pub use list_modal::render_list_modal;
pub use summary::render_summary_panels;
pub(crate) use theme::{accent, severity_color};
