use serde::{Deserialize, Serialize};

use super::{non_empty, ClassList};
use crate::attributes::{
    AttributeSpec, AttributeTarget, AttributeValue, TEXTAREA_ATTRIBUTES, TEXT_INPUT_ATTRIBUTES,
};
use crate::{ControlEvent, ElementIdentity, InputType, Notification};

/// Shared event bridge for single- and multi-line text controls.
///
/// Disabled controls forward nothing. Read-only controls keep their value and
/// forward focus and clipboard events only.
fn bridge_text_event(
    value: &mut String,
    disabled: bool,
    readonly: bool,
    event: ControlEvent,
) -> Option<Notification> {
    if disabled {
        return None;
    }
    match event {
        ControlEvent::Input(next) if !readonly => {
            *value = next;
            Some(Notification::Input)
        }
        ControlEvent::Change if !readonly => Some(Notification::Change),
        ref other => Notification::passthrough(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Single-line text input with label, adornments, and hints.
pub struct TextInputModel {
    /// DOM id/name of the native input.
    pub identity: ElementIdentity,
    /// Native input type; `None` when unknown.
    pub input_type: Option<InputType>,
    /// Current value.
    pub value: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Disabled state.
    pub disabled: bool,
    /// Required state; marks the label.
    pub required: bool,
    /// Read-only state.
    pub readonly: bool,
    /// Invalid state class.
    pub invalid: bool,
    /// Valid state class.
    pub valid: bool,
    /// Error message.
    pub error_message: String,
    /// Label text.
    pub label: String,
    /// Icon before the control.
    pub left_icon: String,
    /// Icon after the control.
    pub right_icon: String,
    /// Static text before the control.
    pub prefix: String,
    /// Static text after the control.
    pub suffix: String,
    /// Left hint text.
    pub left_hint: String,
    /// Right hint text.
    pub right_hint: String,
}

impl Default for TextInputModel {
    fn default() -> Self {
        Self {
            identity: ElementIdentity::default(),
            input_type: Some(InputType::Text),
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            required: false,
            readonly: false,
            invalid: false,
            valid: false,
            error_message: String::new(),
            label: String::new(),
            left_icon: String::new(),
            right_icon: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            left_hint: String::new(),
            right_hint: String::new(),
        }
    }
}

impl TextInputModel {
    /// Wrapper class carrying validation state.
    pub fn wrapper_class(&self) -> String {
        ClassList::new("ui-text-input-wrapper")
            .flag(self.invalid, "invalid")
            .flag(self.valid, "valid")
            .build()
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        non_empty(&self.label)
    }

    /// Leading icon, if any.
    pub fn left_icon(&self) -> Option<&str> {
        non_empty(&self.left_icon)
    }

    /// Trailing icon, if any.
    pub fn right_icon(&self) -> Option<&str> {
        non_empty(&self.right_icon)
    }

    /// Prefix text, if any.
    pub fn prefix(&self) -> Option<&str> {
        non_empty(&self.prefix)
    }

    /// Suffix text, if any.
    pub fn suffix(&self) -> Option<&str> {
        non_empty(&self.suffix)
    }

    /// Reduces a native event on the input.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Notification> {
        bridge_text_event(&mut self.value, self.disabled, self.readonly, event)
    }
}

impl AttributeTarget for TextInputModel {
    const TAG: &'static str = "ui-text-input";
    const ATTRIBUTES: &'static [AttributeSpec] = TEXT_INPUT_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "input_type" => self.input_type = InputType::from_token(value.text()),
            "value" => self.value = value.text().to_string(),
            "placeholder" => self.placeholder = value.text().to_string(),
            "disabled" => self.disabled = value.flag(),
            "required" => self.required = value.flag(),
            "readonly" => self.readonly = value.flag(),
            "invalid" => self.invalid = value.flag(),
            "valid" => self.valid = value.flag(),
            "error_message" => self.error_message = value.text().to_string(),
            "label" => self.label = value.text().to_string(),
            "left_icon" => self.left_icon = value.text().to_string(),
            "right_icon" => self.right_icon = value.text().to_string(),
            "prefix" => self.prefix = value.text().to_string(),
            "suffix" => self.suffix = value.text().to_string(),
            "left_hint" => self.left_hint = value.text().to_string(),
            "right_hint" => self.right_hint = value.text().to_string(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Multi-line text area with label and hints.
pub struct TextareaModel {
    /// DOM id/name of the native textarea.
    pub identity: ElementIdentity,
    /// Current value.
    pub value: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Disabled state.
    pub disabled: bool,
    /// Read-only state.
    pub readonly: bool,
    /// Required state.
    pub required: bool,
    /// Invalid state class.
    pub invalid: bool,
    /// Valid state class.
    pub valid: bool,
    /// Error message.
    pub error_message: String,
    /// Label text.
    pub label: String,
    /// Left hint text.
    pub left_hint: String,
    /// Right hint text.
    pub right_hint: String,
}

impl TextareaModel {
    /// Wrapper class carrying validation state.
    pub fn wrapper_class(&self) -> String {
        ClassList::new("ui-textarea-wrapper")
            .flag(self.invalid, "invalid")
            .flag(self.valid, "valid")
            .build()
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        non_empty(&self.label)
    }

    /// Reduces a native event on the textarea.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Notification> {
        bridge_text_event(&mut self.value, self.disabled, self.readonly, event)
    }
}

impl AttributeTarget for TextareaModel {
    const TAG: &'static str = "ui-textarea";
    const ATTRIBUTES: &'static [AttributeSpec] = TEXTAREA_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "value" => self.value = value.text().to_string(),
            "placeholder" => self.placeholder = value.text().to_string(),
            "disabled" => self.disabled = value.flag(),
            "readonly" => self.readonly = value.flag(),
            "required" => self.required = value.flag(),
            "invalid" => self.invalid = value.flag(),
            "valid" => self.valid = value.flag(),
            "error_message" => self.error_message = value.text().to_string(),
            "label" => self.label = value.text().to_string(),
            "left_hint" => self.left_hint = value.text().to_string(),
            "right_hint" => self.right_hint = value.text().to_string(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apply_attribute;

    #[test]
    fn input_mirrors_value_then_notifies() {
        let mut input = TextInputModel::default();
        let notification = input.handle(ControlEvent::Input("hola".to_string()));
        assert_eq!(input.value, "hola");
        assert_eq!(notification, Some(Notification::Input));
        assert_eq!(input.handle(ControlEvent::Change), Some(Notification::Change));
    }

    #[test]
    fn disabled_input_keeps_value_and_stays_silent() {
        let mut input = TextInputModel {
            value: "fixed".to_string(),
            disabled: true,
            ..TextInputModel::default()
        };
        for event in [
            ControlEvent::Input("edited".to_string()),
            ControlEvent::Change,
            ControlEvent::Focus,
            ControlEvent::Paste,
        ] {
            assert_eq!(input.handle(event), None);
        }
        assert_eq!(input.value, "fixed");
    }

    #[test]
    fn readonly_input_forwards_focus_and_clipboard_only() {
        let mut input = TextInputModel {
            value: "fixed".to_string(),
            readonly: true,
            ..TextInputModel::default()
        };
        assert_eq!(input.handle(ControlEvent::Input("x".to_string())), None);
        assert_eq!(input.value, "fixed");
        assert_eq!(input.handle(ControlEvent::Focus), Some(Notification::Focus));
        assert_eq!(input.handle(ControlEvent::Copy), Some(Notification::Copy));
        assert_eq!(input.handle(ControlEvent::Blur), Some(Notification::Blur));
    }

    #[test]
    fn each_clipboard_event_maps_to_one_notification() {
        let mut area = TextareaModel::default();
        assert_eq!(area.handle(ControlEvent::Copy), Some(Notification::Copy));
        assert_eq!(area.handle(ControlEvent::Cut), Some(Notification::Cut));
        assert_eq!(area.handle(ControlEvent::Paste), Some(Notification::Paste));
        assert_eq!(area.handle(ControlEvent::Click), None);
    }

    #[test]
    fn adornments_and_state_classes_come_from_attributes() {
        let mut input = TextInputModel::default();
        apply_attribute(&mut input, "prefix", Some("$")).expect("prefix");
        apply_attribute(&mut input, "invalid", Some("")).expect("invalid");
        apply_attribute(&mut input, "type", Some("email")).expect("type");
        assert_eq!(input.prefix(), Some("$"));
        assert_eq!(input.suffix(), None);
        assert_eq!(input.input_type, Some(InputType::Email));
        assert_eq!(input.wrapper_class(), "ui-text-input-wrapper invalid");

        let mut area = TextareaModel::default();
        apply_attribute(&mut area, "valid", Some("")).expect("valid");
        apply_attribute(&mut area, "label", Some("Notes")).expect("label");
        assert_eq!(area.wrapper_class(), "ui-textarea-wrapper valid");
        assert_eq!(area.label(), Some("Notes"));
    }

    #[test]
    fn every_native_event_is_replaced_by_one_same_named_notification() {
        let mut area = TextareaModel::default();
        let cases = [
            (ControlEvent::Input("x".to_string()), "input"),
            (ControlEvent::Change, "change"),
            (ControlEvent::Focus, "focus"),
            (ControlEvent::Blur, "blur"),
            (ControlEvent::Copy, "copy"),
            (ControlEvent::Cut, "cut"),
            (ControlEvent::Paste, "paste"),
        ];
        for (event, native_name) in cases {
            let notification = area.handle(event).expect("notification");
            assert_eq!(notification.event_name(), native_name);
        }
    }
}
