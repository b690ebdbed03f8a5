//! Headless contract for the `form_ui` element set.
//!
//! Everything here is free of DOM and framework types: semantic tokens, the
//! attribute-to-property mapping tables, element identity generation, outward
//! notifications, per-widget models that derive their CSS class lists and
//! reduce native control events, and the select/option state machine.
//! The Leptos layer in `form_ui` renders from these models and forwards browser
//! events into them, so every interaction rule can be exercised with plain
//! `cargo test`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod event;
pub mod id;
pub mod select;
pub mod tokens;
pub mod widgets;

pub use attributes::{apply_attribute, AttributeError, AttributeKind, AttributeSpec, AttributeTarget};
pub use event::{ControlEvent, Notification};
pub use id::{ElementIdentity, IdGenerator, SequentialIds, UuidIds};
pub use select::{
    derive_option_list, reduce_select, OptionChild, OptionEntry, OptionListSnapshot, OptionResponder,
    OptionRow, SelectAction, SelectState, SelectedItem, DEFAULT_PLACEHOLDER,
};
pub use tokens::{ButtonType, ColorIntent, InputType};
pub use widgets::{
    ButtonModel, CheckboxModel, HintTextModel, IconModel, InputLabelModel, RadioButtonModel,
    TextInputModel, TextareaModel,
};
