//! Enumerated string tokens shared by the element set.
//!
//! Tokens are parsed leniently: an unrecognized string maps to `None` and the
//! consumer gets "no matching style rule" instead of an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color intent used for buttons, labels, hints, and control accents.
pub enum ColorIntent {
    /// Neutral styling.
    Default,
    /// Primary brand accent.
    Primary,
    /// Secondary brand accent.
    Secondary,
    /// Positive/success state.
    Success,
    /// Error/destructive state. Also accepted as `error`.
    #[serde(alias = "error")]
    Danger,
    /// Warning state.
    Warning,
    /// Informational state.
    Info,
    /// Muted gray, used by labels.
    Gray,
}

impl Default for ColorIntent {
    fn default() -> Self {
        Self::Default
    }
}

impl ColorIntent {
    /// Canonical CSS token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Gray => "gray",
        }
    }

    /// Parses a raw attribute value. `error` is folded into [`ColorIntent::Danger`].
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim() {
            "default" => Some(Self::Default),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "success" => Some(Self::Success),
            "danger" | "error" => Some(Self::Danger),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }

    /// All tokens accepted by [`ColorIntent::from_token`], aliases included.
    pub const TOKENS: &'static [&'static str] = &[
        "default",
        "primary",
        "secondary",
        "success",
        "danger",
        "error",
        "warning",
        "info",
        "gray",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Native button `type` attribute.
pub enum ButtonType {
    /// Plain button.
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Attribute token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Parses a raw attribute value.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim() {
            "button" => Some(Self::Button),
            "submit" => Some(Self::Submit),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    /// All accepted tokens.
    pub const TOKENS: &'static [&'static str] = &["button", "submit", "reset"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Native input `type` attribute for single-line text inputs.
pub enum InputType {
    /// Free text.
    Text,
    /// Masked password.
    Password,
    /// Email address.
    Email,
    /// Numeric value.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search query.
    Search,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Local date and time.
    DatetimeLocal,
    /// Month picker.
    Month,
    /// Week picker.
    Week,
    /// Color picker.
    Color,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Attribute token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Color => "color",
        }
    }

    /// Parses a raw attribute value.
    pub fn from_token(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.token() == raw.trim())
    }

    const ALL: [Self; 13] = [
        Self::Text,
        Self::Password,
        Self::Email,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
        Self::Date,
        Self::Time,
        Self::DatetimeLocal,
        Self::Month,
        Self::Week,
        Self::Color,
    ];

    /// All accepted tokens.
    pub const TOKENS: &'static [&'static str] = &[
        "text",
        "password",
        "email",
        "number",
        "tel",
        "url",
        "search",
        "date",
        "time",
        "datetime-local",
        "month",
        "week",
        "color",
    ];
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_is_an_alias_for_danger() {
        assert_eq!(ColorIntent::from_token("error"), Some(ColorIntent::Danger));
        assert_eq!(ColorIntent::from_token("danger"), Some(ColorIntent::Danger));
        assert_eq!(ColorIntent::Danger.token(), "danger");

        let parsed: ColorIntent = serde_json::from_str("\"error\"").expect("alias deserializes");
        assert_eq!(parsed, ColorIntent::Danger);
        assert_eq!(
            serde_json::to_string(&ColorIntent::Danger).expect("serialize"),
            "\"danger\""
        );
    }

    #[test]
    fn unknown_tokens_degrade_to_none() {
        assert_eq!(ColorIntent::from_token("fuchsia"), None);
        assert_eq!(ButtonType::from_token("link"), None);
        assert_eq!(InputType::from_token("range"), None);
    }

    #[test]
    fn every_listed_token_parses() {
        for raw in ColorIntent::TOKENS {
            assert!(ColorIntent::from_token(raw).is_some(), "{raw}");
        }
        for raw in ButtonType::TOKENS {
            assert_eq!(ButtonType::from_token(raw).map(ButtonType::token), Some(*raw));
        }
        for raw in InputType::TOKENS {
            assert_eq!(InputType::from_token(raw).map(InputType::token), Some(*raw));
        }
    }
}
