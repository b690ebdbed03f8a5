//! Themeable form element library built on Leptos.
//!
//! Each element renders a native control wrapped in a host `div`, exposes the
//! stable class names and `data-ui-*` attributes that theme stylesheets target,
//! and bridges native DOM events into outward notifications. Interaction rules
//! live in the headless [`form_ui_core`] models; components only read props into
//! a model, render from it, and forward browser events through it.
//!
//! Every outward notification is delivered twice: to the matching `on_*`
//! callback prop, and as a bubbling, composed `CustomEvent` dispatched from the
//! element host so plain DOM listeners on any container receive it too.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod emit;
mod icon;
mod primitives;

pub use form_ui_core::{
    ButtonType, ColorIntent, InputType, Notification, OptionChild, DEFAULT_PLACEHOLDER,
};
pub use icon::Icon;
pub use primitives::{
    Button, Checkbox, HintText, InputLabel, RadioButton, Select, SelectOption, TextInput, Textarea,
};

/// Convenience imports for application crates composing form elements.
pub mod prelude {
    pub use crate::{
        Button, ButtonType, Checkbox, ColorIntent, HintText, Icon, InputLabel, InputType,
        OptionChild, RadioButton, Select, SelectOption, TextInput, Textarea,
    };
}
