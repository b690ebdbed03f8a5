//! Display-widget models.
//!
//! Each model is a plain property bag. Rendering helpers derive class lists
//! deterministically from the current properties; `handle` reduces one native
//! [`ControlEvent`](crate::ControlEvent) into at most one outward
//! [`Notification`](crate::Notification), after mirroring any control state
//! back into the model.

mod button;
mod label;
mod text_field;
mod toggle;

pub use button::ButtonModel;
pub use label::{HintTextModel, IconModel, InputLabelModel};
pub use text_field::{TextInputModel, TextareaModel};
pub use toggle::{CheckboxModel, RadioButtonModel};

/// Space-separated class list builder.
#[derive(Debug, Clone)]
pub(crate) struct ClassList(String);

impl ClassList {
    pub(crate) fn new(base: &str) -> Self {
        Self(base.to_string())
    }

    /// Appends `token` when `enabled`.
    pub(crate) fn flag(mut self, enabled: bool, token: &str) -> Self {
        if enabled {
            self.push(token);
        }
        self
    }

    /// Appends `token` when present and non-empty.
    pub(crate) fn token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.push(token);
        }
        self
    }

    fn push(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(token);
    }

    pub(crate) fn build(self) -> String {
        self.0
    }
}

/// Returns `Some(text)` for non-empty strings.
pub(crate) fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
