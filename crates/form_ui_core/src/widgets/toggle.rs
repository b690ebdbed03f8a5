use serde::{Deserialize, Serialize};

use super::{non_empty, ClassList};
use crate::attributes::{
    AttributeSpec, AttributeTarget, AttributeValue, CHECKBOX_ATTRIBUTES, RADIO_BUTTON_ATTRIBUTES,
};
use crate::{ColorIntent, ControlEvent, ElementIdentity, Notification};

/// Copies the native checked state into the model, then reports it.
fn mirror_checked(checked: &mut bool, disabled: bool, event: ControlEvent) -> Option<Notification> {
    match event {
        ControlEvent::Toggle(native) if !disabled => {
            *checked = native;
            Some(Notification::Checked)
        }
        _ => None,
    }
}

fn color_class(color: Option<ColorIntent>) -> Option<String> {
    color.map(|color| format!("color-{}", color.token()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Checkbox with optional label and hints.
pub struct CheckboxModel {
    /// DOM id/name of the native input.
    pub identity: ElementIdentity,
    /// Submitted form value.
    pub value: String,
    /// Label rendered next to the box.
    pub label: String,
    /// Disabled state.
    pub disabled: bool,
    /// Required state.
    pub required: bool,
    /// Indeterminate (mixed) state; swaps the check glyph for a dash.
    pub indeterminate: bool,
    /// Error message.
    pub error_message: String,
    /// Checked state.
    pub checked: bool,
    /// Right-to-left layout: label before box.
    pub rtl: bool,
    /// Accent color.
    pub color: Option<ColorIntent>,
    /// Left hint text.
    pub left_hint: String,
    /// Right hint text.
    pub right_hint: String,
}

impl Default for CheckboxModel {
    fn default() -> Self {
        Self {
            identity: ElementIdentity::default(),
            value: String::new(),
            label: String::new(),
            disabled: false,
            required: false,
            indeterminate: false,
            error_message: String::new(),
            checked: false,
            rtl: false,
            color: Some(ColorIntent::Default),
            left_hint: String::new(),
            right_hint: String::new(),
        }
    }
}

impl CheckboxModel {
    /// Wrapper class (layout direction).
    pub fn wrapper_class(&self) -> String {
        ClassList::new("ui-checkbox-wrapper")
            .flag(self.rtl, "rtl")
            .build()
    }

    /// Native input class.
    pub fn control_class(&self) -> String {
        ClassList::new("ui-checkbox-control")
            .flag(self.checked, "checked")
            .token(color_class(self.color).as_deref())
            .build()
    }

    /// Glyph overlay class; the glyph is visible only while checked.
    pub fn icon_class(&self) -> String {
        ClassList::new("ui-checkbox-icon")
            .token(color_class(self.color).as_deref())
            .flag(self.checked, "visible")
            .build()
    }

    /// Glyph drawn over the box.
    pub fn icon_name(&self) -> &'static str {
        if self.indeterminate {
            "minus"
        } else {
            "check"
        }
    }

    /// Label class.
    pub fn label_class(&self) -> String {
        ClassList::new("ui-checkbox-label")
            .flag(self.disabled, "disabled")
            .build()
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        non_empty(&self.label)
    }

    /// Reduces a native event on the box.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Notification> {
        mirror_checked(&mut self.checked, self.disabled, event)
    }
}

impl AttributeTarget for CheckboxModel {
    const TAG: &'static str = "ui-checkbox";
    const ATTRIBUTES: &'static [AttributeSpec] = CHECKBOX_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "value" => self.value = value.text().to_string(),
            "label" => self.label = value.text().to_string(),
            "disabled" => self.disabled = value.flag(),
            "required" => self.required = value.flag(),
            "indeterminate" => self.indeterminate = value.flag(),
            "error_message" => self.error_message = value.text().to_string(),
            "checked" => self.checked = value.flag(),
            "rtl" => self.rtl = value.flag(),
            "color" => self.color = ColorIntent::from_token(value.text()),
            "left_hint" => self.left_hint = value.text().to_string(),
            "right_hint" => self.right_hint = value.text().to_string(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Radio button with optional label and hints.
pub struct RadioButtonModel {
    /// DOM id/name of the native input. Share `name` across a group.
    pub identity: ElementIdentity,
    /// Submitted form value.
    pub value: String,
    /// Label rendered next to the dot.
    pub label: String,
    /// Disabled state.
    pub disabled: bool,
    /// Required state.
    pub required: bool,
    /// Invalid state class.
    pub invalid: bool,
    /// Valid state class.
    pub valid: bool,
    /// Error message.
    pub error_message: String,
    /// Checked state.
    pub checked: bool,
    /// Right-to-left layout.
    pub rtl: bool,
    /// Accent color.
    pub color: Option<ColorIntent>,
    /// Left hint text.
    pub left_hint: String,
    /// Right hint text.
    pub right_hint: String,
}

impl Default for RadioButtonModel {
    fn default() -> Self {
        Self {
            identity: ElementIdentity::default(),
            value: String::new(),
            label: String::new(),
            disabled: false,
            required: false,
            invalid: false,
            valid: false,
            error_message: String::new(),
            checked: false,
            rtl: false,
            color: Some(ColorIntent::Default),
            left_hint: String::new(),
            right_hint: String::new(),
        }
    }
}

impl RadioButtonModel {
    /// Wrapper class.
    pub fn wrapper_class(&self) -> String {
        ClassList::new("ui-radio-button-wrapper")
            .flag(self.rtl, "rtl")
            .flag(self.invalid, "invalid")
            .flag(self.valid, "valid")
            .build()
    }

    /// Native input class.
    pub fn control_class(&self) -> String {
        ClassList::new("ui-radio-button-control")
            .flag(self.checked, "checked")
            .token(color_class(self.color).as_deref())
            .build()
    }

    /// Label class.
    pub fn label_class(&self) -> String {
        ClassList::new("ui-radio-button-label")
            .flag(self.disabled, "disabled")
            .build()
    }

    /// Label text, if any.
    pub fn label(&self) -> Option<&str> {
        non_empty(&self.label)
    }

    /// Reduces a native event on the radio input.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Notification> {
        mirror_checked(&mut self.checked, self.disabled, event)
    }
}

impl AttributeTarget for RadioButtonModel {
    const TAG: &'static str = "ui-radio-button";
    const ATTRIBUTES: &'static [AttributeSpec] = RADIO_BUTTON_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "value" => self.value = value.text().to_string(),
            "label" => self.label = value.text().to_string(),
            "disabled" => self.disabled = value.flag(),
            "required" => self.required = value.flag(),
            "invalid" => self.invalid = value.flag(),
            "valid" => self.valid = value.flag(),
            "error_message" => self.error_message = value.text().to_string(),
            "checked" => self.checked = value.flag(),
            "rtl" => self.rtl = value.flag(),
            "color" => self.color = ColorIntent::from_token(value.text()),
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
    fn checkbox_mirrors_checked_before_notifying() {
        let mut checkbox = CheckboxModel::default();
        assert!(!checkbox.checked);

        let notification = checkbox.handle(ControlEvent::Toggle(true));

        assert!(checkbox.checked);
        assert_eq!(notification, Some(Notification::Checked));
        assert_eq!(checkbox.control_class(), "ui-checkbox-control checked color-default");
        assert_eq!(checkbox.icon_class(), "ui-checkbox-icon color-default visible");
    }

    #[test]
    fn disabled_checkbox_ignores_toggles() {
        let mut checkbox = CheckboxModel {
            disabled: true,
            ..CheckboxModel::default()
        };
        assert_eq!(checkbox.handle(ControlEvent::Toggle(true)), None);
        assert!(!checkbox.checked);
        assert_eq!(checkbox.label_class(), "ui-checkbox-label disabled");
    }

    #[test]
    fn indeterminate_checkbox_draws_a_dash() {
        let mut checkbox = CheckboxModel::default();
        assert_eq!(checkbox.icon_name(), "check");
        apply_attribute(&mut checkbox, "indeterminate", Some("")).expect("indeterminate");
        assert_eq!(checkbox.icon_name(), "minus");
    }

    #[test]
    fn checkbox_color_accepts_error_alias() {
        let mut checkbox = CheckboxModel::default();
        apply_attribute(&mut checkbox, "color", Some("error")).expect("color");
        apply_attribute(&mut checkbox, "rtl", Some("")).expect("rtl");
        assert_eq!(checkbox.control_class(), "ui-checkbox-control color-danger");
        assert_eq!(checkbox.wrapper_class(), "ui-checkbox-wrapper rtl");
    }

    #[test]
    fn radio_button_mirrors_checked_and_keeps_independent_state_classes() {
        let mut radio = RadioButtonModel {
            invalid: true,
            valid: true,
            color: Some(ColorIntent::Primary),
            ..RadioButtonModel::default()
        };
        assert_eq!(radio.handle(ControlEvent::Toggle(true)), Some(Notification::Checked));
        assert!(radio.checked);
        assert_eq!(radio.wrapper_class(), "ui-radio-button-wrapper invalid valid");
        assert_eq!(radio.control_class(), "ui-radio-button-control checked color-primary");
        assert_eq!(radio.handle(ControlEvent::Click), None);
    }
}
