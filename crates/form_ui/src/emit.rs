//! DOM delivery of outward notifications.

use form_ui_core::Notification;
use leptos::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

/// Dispatches `notification` from the element host as a `CustomEvent`.
///
/// The event bubbles and is composed, so it reaches containers across shadow
/// roots. Detail payloads are plain JS objects.
pub(crate) fn dispatch_notification(host: NodeRef<html::Div>, notification: &Notification) {
    let Some(host) = host.get_untracked() else {
        return;
    };
    let event_name = notification.event_name();

    let detail = match notification
        .detail()
        .serialize(&Serializer::json_compatible())
    {
        Ok(detail) => detail,
        Err(err) => {
            logging::warn!("{event_name} detail serialize failed: {err}");
            return;
        }
    };

    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(Notification::BUBBLES);
    init.set_composed(Notification::COMPOSED);
    init.set_detail(&detail);

    match web_sys::CustomEvent::new_with_event_init_dict(event_name, &init) {
        Ok(event) => {
            if let Err(err) = host.dispatch_event(&event) {
                logging::warn!("{event_name} dispatch failed: {err:?}");
            }
        }
        Err(err) => logging::warn!("{event_name} event construction failed: {err:?}"),
    }
}
