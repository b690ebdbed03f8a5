use serde::{Deserialize, Serialize};

use super::{non_empty, ClassList};
use crate::attributes::{
    AttributeSpec, AttributeTarget, AttributeValue, HINT_TEXT_ATTRIBUTES, ICON_ATTRIBUTES,
    INPUT_LABEL_ATTRIBUTES,
};
use crate::ColorIntent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Field label with an optional required marker.
pub struct InputLabelModel {
    /// Label text.
    pub text: String,
    /// Text color.
    pub color: Option<ColorIntent>,
    /// Shows the `*` marker.
    pub required: bool,
    /// Dimmed label.
    pub disabled: bool,
}

impl Default for InputLabelModel {
    fn default() -> Self {
        Self {
            text: "Label".to_string(),
            color: Some(ColorIntent::Default),
            required: false,
            disabled: false,
        }
    }
}

impl InputLabelModel {
    /// Label class.
    pub fn class(&self) -> String {
        ClassList::new("ui-input-label")
            .token(self.color.map(ColorIntent::token))
            .build()
    }

    /// Required marker, when required.
    pub fn required_marker(&self) -> Option<&'static str> {
        self.required.then_some("*")
    }
}

impl AttributeTarget for InputLabelModel {
    const TAG: &'static str = "ui-input-label";
    const ATTRIBUTES: &'static [AttributeSpec] = INPUT_LABEL_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "text" => self.text = value.text().to_string(),
            "color" => self.color = ColorIntent::from_token(value.text()),
            "required" => self.required = value.flag(),
            "disabled" => self.disabled = value.flag(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Short helper text under a control.
pub struct HintTextModel {
    /// Hint text.
    pub text: String,
    /// Text color.
    pub color: Option<ColorIntent>,
}

impl Default for HintTextModel {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Some(ColorIntent::Default),
        }
    }
}

impl HintTextModel {
    /// Hint class.
    pub fn class(&self) -> String {
        ClassList::new("ui-hint-text")
            .token(self.color.map(ColorIntent::token))
            .flag(self.text.is_empty(), "empty")
            .build()
    }
}

impl AttributeTarget for HintTextModel {
    const TAG: &'static str = "ui-input-hint-text";
    const ATTRIBUTES: &'static [AttributeSpec] = HINT_TEXT_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "text" => self.text = value.text().to_string(),
            "color" => self.color = ColorIntent::from_token(value.text()),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Icon-font glyph reference.
pub struct IconModel {
    /// Glyph name in the icon font (`check`, `nav-arrow-down`, ...).
    pub name: String,
}

impl IconModel {
    /// Creates a model for `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Glyph class, or `None` when no name is set.
    pub fn glyph_class(&self) -> Option<String> {
        non_empty(&self.name).map(|name| format!("iconoir-{name}"))
    }
}

impl AttributeTarget for IconModel {
    const TAG: &'static str = "ui-icon";
    const ATTRIBUTES: &'static [AttributeSpec] = ICON_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        if property == "name" {
            self.name = value.text().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apply_attribute;

    #[test]
    fn label_marks_required_fields() {
        let mut label = InputLabelModel::default();
        assert_eq!(label.text, "Label");
        assert_eq!(label.required_marker(), None);
        apply_attribute(&mut label, "required", Some("")).expect("required");
        apply_attribute(&mut label, "color", Some("gray")).expect("color");
        assert_eq!(label.required_marker(), Some("*"));
        assert_eq!(label.class(), "ui-input-label gray");
    }

    #[test]
    fn hint_text_flags_empty_text() {
        let mut hint = HintTextModel::default();
        assert_eq!(hint.class(), "ui-hint-text default empty");
        apply_attribute(&mut hint, "text", Some("Max 20")).expect("text");
        apply_attribute(&mut hint, "color", Some("danger")).expect("color");
        assert_eq!(hint.class(), "ui-hint-text danger");
    }

    #[test]
    fn icon_glyph_class_uses_font_prefix() {
        assert_eq!(IconModel::named("check").glyph_class().as_deref(), Some("iconoir-check"));
        assert_eq!(IconModel::default().glyph_class(), None);
    }
}
