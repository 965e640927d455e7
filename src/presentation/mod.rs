mod components;
mod view;

pub use view::{ConfirmRender, PanelRender, UiContext, draw};
