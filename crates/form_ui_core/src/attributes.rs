//! External attribute names mapped onto internal model properties.
//!
//! Each element publishes one static table. Markup-facing code (custom-element
//! adapters, server renderers, tests) writes attributes through
//! [`apply_attribute`], which looks the attribute up, coerces the raw value by
//! kind, and hands the result to the model.

use thiserror::Error;

use crate::tokens::{ButtonType, ColorIntent, InputType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a raw attribute value is interpreted.
pub enum AttributeKind {
    /// Free-form string.
    Text,
    /// HTML boolean attribute: present means `true`.
    Flag,
    /// Enumerated string. Unlisted values are accepted and match no style.
    Token(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One row of an element's attribute table.
pub struct AttributeSpec {
    /// External (markup) attribute name.
    pub attribute: &'static str,
    /// Internal property name on the model.
    pub property: &'static str,
    /// Value interpretation.
    pub kind: AttributeKind,
}

const fn text(attribute: &'static str, property: &'static str) -> AttributeSpec {
    AttributeSpec {
        attribute,
        property,
        kind: AttributeKind::Text,
    }
}

const fn flag(attribute: &'static str, property: &'static str) -> AttributeSpec {
    AttributeSpec {
        attribute,
        property,
        kind: AttributeKind::Flag,
    }
}

const fn token(
    attribute: &'static str,
    property: &'static str,
    tokens: &'static [&'static str],
) -> AttributeSpec {
    AttributeSpec {
        attribute,
        property,
        kind: AttributeKind::Token(tokens),
    }
}

// `elementId`/`elementName` have no explicit attribute names, so markup sees
// them lowercased.
const ELEMENT_ID: AttributeSpec = text("elementid", "element_id");
const ELEMENT_NAME: AttributeSpec = text("elementname", "element_name");
const COLOR: AttributeSpec = token("color", "color", ColorIntent::TOKENS);

/// `ui-button` attributes.
pub const BUTTON_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    token("type", "button_type", ButtonType::TOKENS),
    text("text", "text"),
    flag("disabled", "disabled"),
    flag("loading", "loading"),
    COLOR,
    text("left-icon", "left_icon"),
    text("right-icon", "right_icon"),
];

/// `ui-checkbox` attributes.
pub const CHECKBOX_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    text("value", "value"),
    text("label", "label"),
    flag("disabled", "disabled"),
    flag("required", "required"),
    flag("indeterminate", "indeterminate"),
    text("error-message", "error_message"),
    flag("checked", "checked"),
    flag("rtl", "rtl"),
    COLOR,
    text("left-hint", "left_hint"),
    text("right-hint", "right_hint"),
];

/// `ui-radio-button` attributes.
pub const RADIO_BUTTON_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    text("value", "value"),
    text("label", "label"),
    flag("disabled", "disabled"),
    flag("required", "required"),
    flag("invalid", "invalid"),
    flag("valid", "valid"),
    text("error-message", "error_message"),
    flag("checked", "checked"),
    flag("rtl", "rtl"),
    COLOR,
    text("left-hint", "left_hint"),
    text("right-hint", "right_hint"),
];

/// `ui-text-input` attributes.
pub const TEXT_INPUT_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    token("type", "input_type", InputType::TOKENS),
    text("value", "value"),
    text("placeholder", "placeholder"),
    flag("disabled", "disabled"),
    flag("required", "required"),
    flag("readonly", "readonly"),
    flag("invalid", "invalid"),
    flag("valid", "valid"),
    text("error-message", "error_message"),
    text("label", "label"),
    text("left-icon", "left_icon"),
    text("right-icon", "right_icon"),
    text("prefix", "prefix"),
    text("suffix", "suffix"),
    text("left-hint", "left_hint"),
    text("right-hint", "right_hint"),
];

/// `ui-textarea` attributes.
pub const TEXTAREA_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    text("value", "value"),
    text("placeholder", "placeholder"),
    flag("disabled", "disabled"),
    flag("readonly", "readonly"),
    flag("required", "required"),
    flag("invalid", "invalid"),
    flag("valid", "valid"),
    text("error-message", "error_message"),
    text("label", "label"),
    text("left-hint", "left_hint"),
    text("right-hint", "right_hint"),
];

/// `ui-input-label` attributes.
pub const INPUT_LABEL_ATTRIBUTES: &[AttributeSpec] = &[
    text("text", "text"),
    COLOR,
    flag("required", "required"),
    flag("disabled", "disabled"),
];

/// `ui-input-hint-text` attributes.
pub const HINT_TEXT_ATTRIBUTES: &[AttributeSpec] = &[text("text", "text"), COLOR];

/// `ui-icon` attributes.
pub const ICON_ATTRIBUTES: &[AttributeSpec] = &[text("name", "name")];

/// `ui-select` attributes.
pub const SELECT_ATTRIBUTES: &[AttributeSpec] = &[
    ELEMENT_ID,
    ELEMENT_NAME,
    text("label", "label"),
    text("value", "value"),
    text("placeholder", "placeholder"),
    flag("disabled", "disabled"),
    flag("required", "required"),
    flag("invalid", "invalid"),
    flag("valid", "valid"),
    text("left-hint", "left_hint"),
    text("right-hint", "right_hint"),
];

/// `ui-option` attributes.
pub const OPTION_ATTRIBUTES: &[AttributeSpec] = &[
    text("value", "value"),
    text("label", "label"),
    flag("disabled", "disabled"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Attribute value after coercion by [`AttributeKind`].
pub enum AttributeValue<'a> {
    /// String or enumerated value.
    Text(&'a str),
    /// Boolean attribute presence.
    Flag(bool),
}

impl<'a> AttributeValue<'a> {
    /// String payload; empty for flags.
    pub fn text(self) -> &'a str {
        match self {
            Self::Text(raw) => raw,
            Self::Flag(_) => "",
        }
    }

    /// Boolean payload; a text value counts as present.
    pub fn flag(self) -> bool {
        match self {
            Self::Text(_) => true,
            Self::Flag(value) => value,
        }
    }
}

/// A model that can be written through its attribute table.
pub trait AttributeTarget {
    /// Custom-element tag the table belongs to.
    const TAG: &'static str;
    /// Static attribute table.
    const ATTRIBUTES: &'static [AttributeSpec];

    /// Writes one property. `property` is always a name from [`Self::ATTRIBUTES`].
    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Attribute write failures.
pub enum AttributeError {
    /// The element's table has no such attribute.
    #[error("<{tag}> has no attribute `{attribute}`")]
    Unknown {
        /// Element tag.
        tag: &'static str,
        /// Attribute name as supplied.
        attribute: String,
    },
}

/// Looks up `attribute` in `table`. Attribute names are ASCII case-insensitive.
pub fn attribute_spec(
    table: &'static [AttributeSpec],
    attribute: &str,
) -> Option<&'static AttributeSpec> {
    table
        .iter()
        .find(|spec| spec.attribute.eq_ignore_ascii_case(attribute))
}

/// Writes a markup attribute onto `target`.
///
/// `raw` is `None` when the attribute is absent or removed.
pub fn apply_attribute<T: AttributeTarget>(
    target: &mut T,
    attribute: &str,
    raw: Option<&str>,
) -> Result<&'static AttributeSpec, AttributeError> {
    let spec = attribute_spec(T::ATTRIBUTES, attribute).ok_or_else(|| AttributeError::Unknown {
        tag: T::TAG,
        attribute: attribute.to_string(),
    })?;
    let value = match spec.kind {
        AttributeKind::Flag => AttributeValue::Flag(raw.is_some()),
        AttributeKind::Text | AttributeKind::Token(_) => AttributeValue::Text(raw.unwrap_or_default()),
    };
    target.set_property(spec.property, value);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_TABLES: &[&[AttributeSpec]] = &[
        BUTTON_ATTRIBUTES,
        CHECKBOX_ATTRIBUTES,
        RADIO_BUTTON_ATTRIBUTES,
        TEXT_INPUT_ATTRIBUTES,
        TEXTAREA_ATTRIBUTES,
        INPUT_LABEL_ATTRIBUTES,
        HINT_TEXT_ATTRIBUTES,
        ICON_ATTRIBUTES,
        SELECT_ATTRIBUTES,
        OPTION_ATTRIBUTES,
    ];

    #[test]
    fn tables_have_no_duplicate_attributes() {
        for table in ALL_TABLES {
            for (index, spec) in table.iter().enumerate() {
                assert!(
                    table[index + 1..]
                        .iter()
                        .all(|other| other.attribute != spec.attribute),
                    "duplicate attribute `{}`",
                    spec.attribute
                );
            }
        }
    }

    #[test]
    fn kebab_case_attributes_map_to_snake_case_properties() {
        let spec = attribute_spec(TEXT_INPUT_ATTRIBUTES, "left-hint").expect("left-hint");
        assert_eq!(spec.property, "left_hint");
        let spec = attribute_spec(CHECKBOX_ATTRIBUTES, "error-message").expect("error-message");
        assert_eq!(spec.property, "error_message");
        let spec = attribute_spec(BUTTON_ATTRIBUTES, "elementId").expect("case-insensitive");
        assert_eq!(spec.property, "element_id");
    }

    #[test]
    fn value_coercion_follows_html_presence_rules() {
        assert!(AttributeValue::Text("").flag());
        assert!(!AttributeValue::Flag(false).flag());
        assert_eq!(AttributeValue::Flag(true).text(), "");
    }
}
