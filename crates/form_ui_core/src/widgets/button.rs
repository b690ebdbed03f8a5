use serde::{Deserialize, Serialize};

use super::{non_empty, ClassList};
use crate::attributes::{AttributeTarget, AttributeValue, BUTTON_ATTRIBUTES};
use crate::{ButtonType, ColorIntent, ControlEvent, ElementIdentity, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Action button.
pub struct ButtonModel {
    /// DOM id/name of the native button.
    pub identity: ElementIdentity,
    /// Native `type`; `None` when the attribute held an unknown token.
    pub button_type: Option<ButtonType>,
    /// Button caption.
    pub text: String,
    /// Disabled buttons emit nothing.
    pub disabled: bool,
    /// Loading buttons show a spinner and ignore pointer activation.
    pub loading: bool,
    /// Color intent; `None` when unknown.
    pub color: Option<ColorIntent>,
    /// Icon rendered before the caption.
    pub left_icon: String,
    /// Icon rendered after the caption.
    pub right_icon: String,
}

impl Default for ButtonModel {
    fn default() -> Self {
        Self {
            identity: ElementIdentity::default(),
            button_type: Some(ButtonType::Button),
            text: "Button".to_string(),
            disabled: false,
            loading: false,
            color: Some(ColorIntent::Default),
            left_icon: String::new(),
            right_icon: String::new(),
        }
    }
}

impl ButtonModel {
    /// Class list of the native button.
    pub fn class(&self) -> String {
        ClassList::new("ui-button")
            .token(self.color.map(ColorIntent::token))
            .build()
    }

    /// Leading icon name, if any.
    pub fn left_icon(&self) -> Option<&str> {
        non_empty(&self.left_icon)
    }

    /// Trailing icon name, if any.
    pub fn right_icon(&self) -> Option<&str> {
        non_empty(&self.right_icon)
    }

    /// Whether pointer activation is currently accepted.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Reduces a native event on the button.
    pub fn handle(&mut self, event: ControlEvent) -> Option<Notification> {
        match event {
            ControlEvent::Click if self.is_interactive() => Some(Notification::Clicked),
            _ => None,
        }
    }
}

impl AttributeTarget for ButtonModel {
    const TAG: &'static str = "ui-button";
    const ATTRIBUTES: &'static [crate::AttributeSpec] = BUTTON_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "button_type" => self.button_type = ButtonType::from_token(value.text()),
            "text" => self.text = value.text().to_string(),
            "disabled" => self.disabled = value.flag(),
            "loading" => self.loading = value.flag(),
            "color" => self.color = ColorIntent::from_token(value.text()),
            "left_icon" => self.left_icon = value.text().to_string(),
            "right_icon" => self.right_icon = value.text().to_string(),
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
    fn click_emits_clicked_once() {
        let mut button = ButtonModel::default();
        assert_eq!(button.handle(ControlEvent::Click), Some(Notification::Clicked));
        assert_eq!(button.handle(ControlEvent::Focus), None);
    }

    #[test]
    fn disabled_or_loading_button_swallows_clicks() {
        let mut button = ButtonModel {
            disabled: true,
            ..ButtonModel::default()
        };
        assert_eq!(button.handle(ControlEvent::Click), None);

        button.disabled = false;
        button.loading = true;
        assert_eq!(button.handle(ControlEvent::Click), None);
    }

    #[test]
    fn unknown_color_renders_no_color_class() {
        let mut button = ButtonModel::default();
        assert_eq!(button.class(), "ui-button default");

        apply_attribute(&mut button, "color", Some("error")).expect("color");
        assert_eq!(button.class(), "ui-button danger");

        apply_attribute(&mut button, "color", Some("chartreuse")).expect("color");
        assert_eq!(button.color, None);
        assert_eq!(button.class(), "ui-button");
    }

    #[test]
    fn attributes_write_through_the_table() {
        let mut button = ButtonModel::default();
        apply_attribute(&mut button, "type", Some("submit")).expect("type");
        apply_attribute(&mut button, "left-icon", Some("arrow-left")).expect("left-icon");
        apply_attribute(&mut button, "disabled", Some("")).expect("disabled");
        assert_eq!(button.button_type, Some(ButtonType::Submit));
        assert_eq!(button.left_icon(), Some("arrow-left"));
        assert_eq!(button.right_icon(), None);
        assert!(button.disabled);

        apply_attribute(&mut button, "disabled", None).expect("disabled removed");
        assert!(!button.disabled);

        let err = apply_attribute(&mut button, "size", Some("lg")).expect_err("unknown");
        assert_eq!(err.to_string(), "<ui-button> has no attribute `size`");
    }
}
