//! Native control events in, outward notifications out.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Native interaction observed on an element's inner control.
pub enum ControlEvent {
    /// Pointer activation.
    Click,
    /// Text edit; carries the control's value after the edit.
    Input(String),
    /// Checkbox/radio activation; carries the control's checked state after the click.
    Toggle(bool),
    /// Committed change.
    Change,
    /// Control gained focus.
    Focus,
    /// Control lost focus.
    Blur,
    /// Clipboard copy.
    Copy,
    /// Clipboard cut.
    Cut,
    /// Clipboard paste.
    Paste,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail", rename_all = "kebab-case")]
/// Outward event raised by an element after it has applied its own state change.
///
/// Outward events always bubble and cross shadow boundaries; the native event
/// that triggered them is stopped at the element.
pub enum Notification {
    /// Button activation.
    Clicked,
    /// Checkbox or radio button checked state changed.
    Checked,
    /// Text value edited.
    Input,
    /// Text value committed.
    Change,
    /// Control focused.
    Focus,
    /// Control blurred.
    Blur,
    /// Clipboard copy.
    Copy,
    /// Clipboard cut.
    Cut,
    /// Clipboard paste.
    Paste,
    /// Select option chosen by the user.
    #[serde(rename = "on-select")]
    Select {
        /// Newly selected option value.
        value: String,
    },
}

impl Notification {
    /// Outward notifications propagate to containers.
    pub const BUBBLES: bool = true;
    /// Outward notifications cross shadow-root boundaries.
    pub const COMPOSED: bool = true;

    /// DOM event type used when the notification is dispatched.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Clicked => "clicked",
            Self::Checked => "checked",
            Self::Input => "input",
            Self::Change => "change",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Copy => "copy",
            Self::Cut => "cut",
            Self::Paste => "paste",
            Self::Select { .. } => "on-select",
        }
    }

    /// Detail payload carried by the dispatched event.
    pub fn detail(&self) -> Value {
        match self {
            Self::Select { value } => json!({ "value": value }),
            _ => Value::Null,
        }
    }

    /// Notification forwarded one-to-one for focus and clipboard events.
    pub(crate) fn passthrough(event: &ControlEvent) -> Option<Self> {
        match event {
            ControlEvent::Focus => Some(Self::Focus),
            ControlEvent::Blur => Some(Self::Blur),
            ControlEvent::Copy => Some(Self::Copy),
            ControlEvent::Cut => Some(Self::Cut),
            ControlEvent::Paste => Some(Self::Paste),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_notification_carries_value_detail() {
        let notification = Notification::Select {
            value: "b".to_string(),
        };
        assert_eq!(notification.event_name(), "on-select");
        assert_eq!(notification.detail(), json!({ "value": "b" }));
        assert_eq!(
            serde_json::to_value(&notification).expect("serialize"),
            json!({ "event": "on-select", "detail": { "value": "b" } })
        );
    }

    #[test]
    fn plain_notifications_have_no_detail() {
        assert_eq!(Notification::Clicked.detail(), Value::Null);
        assert_eq!(Notification::Checked.event_name(), "checked");
        assert_eq!(
            serde_json::to_value(Notification::Paste).expect("serialize"),
            json!({ "event": "paste" })
        );
    }
}
