//! Form element components.

use form_ui_core::{ColorIntent, ControlEvent, ElementIdentity, Notification, UuidIds};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::emit::dispatch_notification;
use crate::Icon;

mod button;
mod fields;
mod labels;
mod select;
mod toggles;

pub use button::Button;
pub use fields::{TextInput, Textarea};
pub use labels::{HintText, InputLabel};
pub use select::{Select, SelectOption};
pub use toggles::{Checkbox, RadioButton};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Resolves caller-supplied id/name, generating UUIDs for whatever is missing.
pub(crate) fn element_identity(id: Option<String>, name: Option<String>) -> ElementIdentity {
    ElementIdentity::resolve(id, name, &UuidIds)
}

/// Delivers `notification` as a DOM event, then to `callback`.
pub(crate) fn notify<T: 'static>(
    host: NodeRef<html::Div>,
    notification: &Notification,
    callback: Option<Callback<T>>,
    payload: T,
) {
    dispatch_notification(host, notification);
    if let Some(callback) = callback {
        callback.call(payload);
    }
}

/// Left/right hint row rendered under a control.
pub(crate) fn hint_row(
    class: &'static str,
    left: Signal<String>,
    right: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=class data-ui-slot="hints">
            <HintText text=left />
            <HintText text=right />
        </div>
    }
}

/// Error message line; renders nothing while `message` is empty.
pub(crate) fn error_line(message: Signal<String>) -> impl IntoView {
    move || {
        let text = message.get();
        (!text.is_empty()).then(|| {
            view! { <HintText text=text color=ColorIntent::Danger /> }
        })
    }
}

/// Whether `ev` targets a node inside `host`.
pub(crate) fn event_within(ev: &web_sys::Event, host: NodeRef<html::Div>) -> bool {
    let Some(host) = host.get_untracked() else {
        return false;
    };
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| host.contains(Some(&node)))
}

/// Reads the native text of `ev`'s target into a [`ControlEvent::Input`].
pub(crate) fn input_event(ev: &web_sys::Event) -> ControlEvent {
    ControlEvent::Input(event_target_value(ev))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-select", Some("grow")), "ui-select grow");
        assert_eq!(merge_layout_class("ui-select", Some("")), "ui-select");
        assert_eq!(merge_layout_class("ui-select", None), "ui-select");
    }

    #[test]
    fn bool_tokens_match_data_attribute_values() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn supplied_identity_is_kept() {
        let identity = element_identity(Some("email".to_string()), None);
        assert_eq!(identity.id, "email");
        assert!(!identity.name.is_empty());
        assert_ne!(identity.name, identity.id);
    }
}
