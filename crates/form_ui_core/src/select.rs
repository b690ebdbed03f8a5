//! Select/option interaction model.
//!
//! A select observes an ordered collection of declared [`OptionChild`] records
//! supplied by its consumer. Whenever that collection or the bound value
//! changes, the enabled options are re-derived into an option list and a fresh
//! set of click responders is issued, one per enabled option. Responders carry
//! the generation of the scan that produced them; activating a responder from
//! an older scan is ignored, so listeners on replaced options can never reach
//! the select.
//!
//! Selection can change along two paths that share one internal setter:
//! the resync path (bound value / child set changed) never notifies, the user
//! path (a responder was activated) always notifies exactly once.

use serde::{Deserialize, Serialize};

use crate::attributes::{
    AttributeSpec, AttributeTarget, AttributeValue, OPTION_ATTRIBUTES, SELECT_ATTRIBUTES,
};
use crate::widgets::{non_empty, ClassList};
use crate::{ElementIdentity, Notification};

/// Trigger text shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Seleccionar";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Option declared by the consumer. Passive data; the select only reads it.
pub struct OptionChild {
    /// Submitted value.
    pub value: String,
    /// Explicit label. Falls back to [`OptionChild::text_content`] when unset or empty.
    pub label: Option<String>,
    /// Text content of the declared option.
    pub text_content: String,
    /// Disabled options are listed but never selectable.
    pub disabled: bool,
}

impl OptionChild {
    /// Declares an enabled option whose label is its text content.
    pub fn new(value: impl Into<String>, text_content: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            text_content: text_content.into(),
            disabled: false,
        }
    }

    /// Sets an explicit label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Label shown for this option.
    pub fn resolved_label(&self) -> &str {
        self.label
            .as_deref()
            .and_then(non_empty)
            .unwrap_or(&self.text_content)
    }
}

impl AttributeTarget for OptionChild {
    const TAG: &'static str = "ui-option";
    const ATTRIBUTES: &'static [AttributeSpec] = OPTION_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "value" => self.value = value.text().to_string(),
            "label" => self.label = non_empty(value.text()).map(str::to_string),
            "disabled" => self.disabled = value.flag(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Enabled option in the derived list.
pub struct OptionEntry {
    /// Option value.
    pub value: String,
    /// Resolved label.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Currently displayed selection.
pub struct SelectedItem {
    /// Selected value.
    pub value: String,
    /// Label shown on the trigger.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`derive_option_list`].
pub struct OptionListSnapshot {
    /// Enabled options in declaration order.
    pub options: Vec<OptionEntry>,
    /// The option matching the current value, if any.
    pub resolved: Option<SelectedItem>,
}

/// Derives the option list from declared children.
///
/// Disabled children are dropped. When several enabled options share the
/// current value, the last one wins.
pub fn derive_option_list(children: &[OptionChild], current_value: &str) -> OptionListSnapshot {
    let options: Vec<OptionEntry> = children
        .iter()
        .filter(|child| !child.disabled)
        .map(|child| OptionEntry {
            value: child.value.clone(),
            label: child.resolved_label().to_string(),
        })
        .collect();
    let resolved = options
        .iter()
        .rev()
        .find(|entry| entry.value == current_value)
        .map(|entry| SelectedItem {
            value: entry.value.clone(),
            label: entry.label.clone(),
        });

    OptionListSnapshot { options, resolved }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Click responder issued for one enabled option by one scan.
pub struct OptionResponder {
    generation: u64,
    value: String,
    label: String,
}

impl OptionResponder {
    /// Value this responder selects.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Label this responder selects.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scan generation that issued the responder.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One declared option as rendered in the dropdown.
pub struct OptionRow {
    /// Declared option.
    pub child: OptionChild,
    /// Responder for enabled options; `None` for disabled ones.
    pub responder: Option<OptionResponder>,
    /// Whether this row is the current selection.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_select`].
pub enum SelectAction {
    /// Trigger clicked: open or close the dropdown.
    Toggle,
    /// Close without selecting (Escape, focus loss).
    Dismiss,
    /// A mousedown landed somewhere in the document. Closes the dropdown
    /// only when it landed outside this select.
    PointerDown {
        /// Whether the mousedown target lies inside the select element.
        inside: bool,
    },
    /// User activated an option.
    ActivateOption(OptionResponder),
    /// Consumer rebound the selected value.
    BindValue(String),
    /// The declared child set changed.
    ReplaceChildren(Vec<OptionChild>),
    /// Consumer toggled the disabled flag.
    SetDisabled(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionSource {
    /// Consumer binding or child rescan.
    Resync,
    /// Responder activation.
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State owned by one select instance.
pub struct SelectState {
    /// DOM id/name of the select.
    pub identity: ElementIdentity,
    /// Field label.
    pub label: String,
    /// Trigger text while nothing is selected.
    pub placeholder: String,
    /// Required marker on the label.
    pub required: bool,
    /// Invalid state class.
    pub invalid: bool,
    /// Valid state class.
    pub valid: bool,
    /// Left hint text.
    pub left_hint: String,
    /// Right hint text.
    pub right_hint: String,
    disabled: bool,
    value: String,
    selected: Option<SelectedItem>,
    is_open: bool,
    children: Vec<OptionChild>,
    options: Vec<OptionEntry>,
    responders: Vec<OptionResponder>,
    generation: u64,
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new(ElementIdentity::default())
    }
}

impl SelectState {
    /// Creates a closed select with no options.
    pub fn new(identity: ElementIdentity) -> Self {
        Self {
            identity,
            label: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: false,
            invalid: false,
            valid: false,
            left_hint: String::new(),
            right_hint: String::new(),
            disabled: false,
            value: String::new(),
            selected: None,
            is_open: false,
            children: Vec::new(),
            options: Vec::new(),
            responders: Vec::new(),
            generation: 0,
        }
    }

    /// Bound value. May name no option while the list is still unknown.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Label of the current selection.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.as_ref().map(|item| item.label.as_str())
    }

    /// Current selection.
    pub fn selected(&self) -> Option<&SelectedItem> {
        self.selected.as_ref()
    }

    /// Text on the trigger: selected label or placeholder.
    pub fn display_text(&self) -> &str {
        self.selected_label().unwrap_or(&self.placeholder)
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the select is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enabled options from the latest scan.
    pub fn options(&self) -> &[OptionEntry] {
        &self.options
    }

    /// Declared children from the latest scan, disabled ones included.
    pub fn children(&self) -> &[OptionChild] {
        &self.children
    }

    /// Responders issued by the latest scan.
    pub fn responders(&self) -> &[OptionResponder] {
        &self.responders
    }

    /// Generation of the latest scan.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `value` names an enabled option.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|entry| entry.value == value)
    }

    /// Declared children paired with their responders, for rendering.
    ///
    /// Only one row is marked selected: with duplicate values, the last
    /// enabled match, the same one [`derive_option_list`] resolves.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let selected_index = self.selected.as_ref().and_then(|item| {
            self.children
                .iter()
                .rposition(|child| !child.disabled && child.value == item.value)
        });
        let mut responders = self.responders.iter();
        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let responder = if child.disabled {
                    None
                } else {
                    responders.next().cloned()
                };
                OptionRow {
                    selected: selected_index == Some(index),
                    child: child.clone(),
                    responder,
                }
            })
            .collect()
    }

    /// Value submitted with the enclosing form; disabled selects submit nothing.
    pub fn submitted_value(&self) -> Option<&str> {
        (!self.disabled).then_some(self.value.as_str())
    }

    /// Whether a required, enabled select still lacks a value and would block
    /// native form submission.
    pub fn value_missing(&self) -> bool {
        self.required && !self.disabled && self.value.is_empty()
    }

    /// Trigger class.
    pub fn wrapper_class(&self) -> String {
        ClassList::new("ui-select-wrapper")
            .flag(self.is_open, "open")
            .flag(self.invalid, "invalid")
            .flag(self.valid, "valid")
            .build()
    }

    /// Dropdown class.
    pub fn dropdown_class(&self) -> String {
        ClassList::new("ui-select-dropdown")
            .flag(self.is_open, "open")
            .build()
    }

    /// Chevron glyph on the trigger.
    pub fn chevron_icon(&self) -> &'static str {
        if self.is_open {
            "nav-arrow-up"
        } else {
            "nav-arrow-down"
        }
    }

    /// Re-derives options and reissues responders.
    fn rescan(&mut self) -> Option<SelectedItem> {
        let snapshot = derive_option_list(&self.children, &self.value);
        self.generation += 1;
        self.responders = snapshot
            .options
            .iter()
            .map(|entry| OptionResponder {
                generation: self.generation,
                value: entry.value.clone(),
                label: entry.label.clone(),
            })
            .collect();
        self.options = snapshot.options;
        snapshot.resolved
    }
}

/// Sets the selection. Only the user path closes the dropdown and notifies.
fn apply_selection(
    state: &mut SelectState,
    item: SelectedItem,
    source: SelectionSource,
) -> Option<Notification> {
    state.value = item.value.clone();
    state.selected = Some(item);
    match source {
        SelectionSource::Resync => None,
        SelectionSource::User => {
            state.is_open = false;
            Some(Notification::Select {
                value: state.value.clone(),
            })
        }
    }
}

/// Applies `action` to `state`, returning the outward notifications to emit in order.
pub fn reduce_select(state: &mut SelectState, action: SelectAction) -> Vec<Notification> {
    let mut notifications = Vec::new();

    match action {
        SelectAction::Toggle => {
            if !state.disabled {
                state.is_open = !state.is_open;
            }
        }
        SelectAction::Dismiss => {
            state.is_open = false;
        }
        SelectAction::PointerDown { inside } => {
            if !inside {
                state.is_open = false;
            }
        }
        SelectAction::ActivateOption(responder) => {
            if responder.generation != state.generation || !state.is_open || state.disabled {
                return notifications;
            }
            let item = SelectedItem {
                value: responder.value,
                label: responder.label,
            };
            notifications.extend(apply_selection(state, item, SelectionSource::User));
        }
        SelectAction::BindValue(value) => {
            if value == state.value {
                return notifications;
            }
            state.value = value;
            // An unmatched value keeps whatever label is already displayed.
            if let Some(item) = state.rescan() {
                notifications.extend(apply_selection(state, item, SelectionSource::Resync));
            }
        }
        SelectAction::ReplaceChildren(children) => {
            if children == state.children {
                return notifications;
            }
            state.children = children;
            match state.rescan() {
                Some(item) => {
                    notifications.extend(apply_selection(state, item, SelectionSource::Resync));
                }
                None => state.selected = None,
            }
        }
        SelectAction::SetDisabled(disabled) => {
            state.disabled = disabled;
            if disabled {
                state.is_open = false;
            }
        }
    }

    notifications
}

impl AttributeTarget for SelectState {
    const TAG: &'static str = "ui-select";
    const ATTRIBUTES: &'static [AttributeSpec] = SELECT_ATTRIBUTES;

    fn set_property(&mut self, property: &'static str, value: AttributeValue<'_>) {
        match property {
            "element_id" => self.identity.id = value.text().to_string(),
            "element_name" => self.identity.name = value.text().to_string(),
            "label" => self.label = value.text().to_string(),
            "value" => {
                reduce_select(self, SelectAction::BindValue(value.text().to_string()));
            }
            "placeholder" => self.placeholder = value.text().to_string(),
            "disabled" => {
                reduce_select(self, SelectAction::SetDisabled(value.flag()));
            }
            "required" => self.required = value.flag(),
            "invalid" => self.invalid = value.flag(),
            "valid" => self.valid = value.flag(),
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
    use crate::{apply_attribute, SequentialIds};

    fn alpha_beta() -> Vec<OptionChild> {
        vec![OptionChild::new("a", "Alpha"), OptionChild::new("b", "Beta")]
    }

    fn select_with(children: Vec<OptionChild>) -> SelectState {
        let mut state = SelectState::new(ElementIdentity::generate(&SequentialIds::new("select")));
        let notifications = reduce_select(&mut state, SelectAction::ReplaceChildren(children));
        assert!(notifications.is_empty());
        state
    }

    fn responder_for(state: &SelectState, value: &str) -> OptionResponder {
        state
            .responders()
            .iter()
            .find(|responder| responder.value() == value)
            .cloned()
            .expect("responder for value")
    }

    #[test]
    fn derive_option_list_drops_disabled_and_keeps_order() {
        let children = vec![
            OptionChild::new("a", "Alpha"),
            OptionChild::new("x", "Excluded").with_disabled(true),
            OptionChild::new("b", "Beta").with_label("Bee"),
        ];
        let snapshot = derive_option_list(&children, "b");
        assert_eq!(
            snapshot.options,
            vec![
                OptionEntry {
                    value: "a".to_string(),
                    label: "Alpha".to_string()
                },
                OptionEntry {
                    value: "b".to_string(),
                    label: "Bee".to_string()
                },
            ]
        );
        assert_eq!(
            snapshot.resolved,
            Some(SelectedItem {
                value: "b".to_string(),
                label: "Bee".to_string()
            })
        );
        assert_eq!(derive_option_list(&children, "x").resolved, None);
    }

    #[test]
    fn empty_explicit_label_falls_back_to_text_content() {
        let child = OptionChild::new("a", "Alpha").with_label("");
        assert_eq!(child.resolved_label(), "Alpha");
    }

    #[test]
    fn unset_value_shows_placeholder_and_binding_resolves_label_silently() {
        let mut state = select_with(alpha_beta());
        assert_eq!(state.display_text(), "Seleccionar");
        assert_eq!(state.selected_label(), None);

        let notifications = reduce_select(&mut state, SelectAction::BindValue("b".to_string()));

        assert!(notifications.is_empty());
        assert_eq!(state.selected_label(), Some("Beta"));
        assert_eq!(state.display_text(), "Beta");
        assert!(!state.is_open());
    }

    #[test]
    fn user_activation_closes_and_notifies_once() {
        let mut state = select_with(alpha_beta());

        assert!(reduce_select(&mut state, SelectAction::Toggle).is_empty());
        assert!(state.is_open());
        assert_eq!(state.dropdown_class(), "ui-select-dropdown open");
        assert_eq!(state.chevron_icon(), "nav-arrow-up");

        let alpha = responder_for(&state, "a");
        let notifications = reduce_select(&mut state, SelectAction::ActivateOption(alpha));

        assert_eq!(
            notifications,
            vec![Notification::Select {
                value: "a".to_string()
            }]
        );
        assert_eq!(state.selected_label(), Some("Alpha"));
        assert_eq!(state.value(), "a");
        assert!(!state.is_open());
    }

    #[test]
    fn double_toggle_restores_state_without_notifications() {
        let mut state = select_with(alpha_beta());
        let before = state.clone();
        assert!(reduce_select(&mut state, SelectAction::Toggle).is_empty());
        assert!(reduce_select(&mut state, SelectAction::Toggle).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn disabled_select_never_opens() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::SetDisabled(true));
        reduce_select(&mut state, SelectAction::Toggle);
        assert!(!state.is_open());

        let beta = responder_for(&state, "b");
        assert!(reduce_select(&mut state, SelectAction::ActivateOption(beta)).is_empty());
        assert_eq!(state.selected_label(), None);
    }

    #[test]
    fn disabling_an_open_select_closes_it() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        reduce_select(&mut state, SelectAction::SetDisabled(true));
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_options_get_no_responder() {
        let state = select_with(vec![
            OptionChild::new("a", "Alpha"),
            OptionChild::new("b", "Beta").with_disabled(true),
        ]);
        assert_eq!(state.responders().len(), 1);
        let rows = state.option_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].responder.is_some());
        assert!(rows[1].responder.is_none());
    }

    #[test]
    fn rescanning_identical_children_is_idempotent() {
        let mut state = select_with(alpha_beta());
        let options = state.options().to_vec();
        let generation = state.generation();

        let notifications = reduce_select(&mut state, SelectAction::ReplaceChildren(alpha_beta()));

        assert!(notifications.is_empty());
        assert_eq!(state.options(), options.as_slice());
        assert_eq!(state.generation(), generation);
        assert_eq!(derive_option_list(&alpha_beta(), ""), derive_option_list(&alpha_beta(), ""));
    }

    #[test]
    fn stale_responders_do_not_fire() {
        let mut state = select_with(alpha_beta());
        let stale = responder_for(&state, "a");

        reduce_select(
            &mut state,
            SelectAction::ReplaceChildren(vec![
                OptionChild::new("a", "Alpha v2"),
                OptionChild::new("c", "Gamma"),
            ]),
        );
        reduce_select(&mut state, SelectAction::Toggle);

        assert!(reduce_select(&mut state, SelectAction::ActivateOption(stale)).is_empty());
        assert_eq!(state.selected_label(), None);
        assert!(state.is_open());

        let fresh = responder_for(&state, "a");
        let notifications = reduce_select(&mut state, SelectAction::ActivateOption(fresh));
        assert_eq!(notifications.len(), 1);
        assert_eq!(state.selected_label(), Some("Alpha v2"));
    }

    #[test]
    fn binding_an_unknown_value_keeps_the_displayed_label() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::BindValue("a".to_string()));

        let notifications = reduce_select(&mut state, SelectAction::BindValue("zzz".to_string()));

        assert!(notifications.is_empty());
        assert_eq!(state.value(), "zzz");
        assert_eq!(state.selected_label(), Some("Alpha"));
    }

    #[test]
    fn binding_does_not_change_open_state() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        reduce_select(&mut state, SelectAction::BindValue("b".to_string()));
        assert!(state.is_open());
        assert_eq!(state.selected_label(), Some("Beta"));
    }

    #[test]
    fn value_bound_before_children_resolves_on_first_scan() {
        let mut state = SelectState::new(ElementIdentity::generate(&SequentialIds::new("s")));
        reduce_select(&mut state, SelectAction::BindValue("b".to_string()));
        assert_eq!(state.value(), "b");
        assert_eq!(state.display_text(), DEFAULT_PLACEHOLDER);

        let notifications = reduce_select(&mut state, SelectAction::ReplaceChildren(alpha_beta()));

        assert!(notifications.is_empty());
        assert_eq!(state.selected_label(), Some("Beta"));
    }

    #[test]
    fn child_rescan_reconciles_selection_to_placeholder() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::BindValue("b".to_string()));

        reduce_select(
            &mut state,
            SelectAction::ReplaceChildren(vec![
                OptionChild::new("a", "Alpha"),
                OptionChild::new("b", "Beta").with_disabled(true),
            ]),
        );

        assert_eq!(state.selected_label(), None);
        assert_eq!(state.display_text(), "Seleccionar");
        assert!(!state.has_option("b"));
    }

    #[test]
    fn option_rows_mark_the_selected_option() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::BindValue("b".to_string()));
        let selected: Vec<bool> = state.option_rows().iter().map(|row| row.selected).collect();
        assert_eq!(selected, vec![false, true]);
    }

    #[test]
    fn duplicate_values_mark_only_the_resolved_row() {
        let mut state = select_with(vec![
            OptionChild::new("a", "First"),
            OptionChild::new("b", "Beta"),
            OptionChild::new("a", "Second"),
        ]);
        reduce_select(&mut state, SelectAction::BindValue("a".to_string()));
        assert_eq!(state.selected_label(), Some("Second"));
        let selected: Vec<bool> = state.option_rows().iter().map(|row| row.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
    }

    #[test]
    fn pointer_down_on_an_option_keeps_the_dropdown_open_for_activation() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        let alpha = responder_for(&state, "a");

        assert!(reduce_select(&mut state, SelectAction::PointerDown { inside: true }).is_empty());
        assert!(state.is_open());

        let notifications = reduce_select(&mut state, SelectAction::ActivateOption(alpha));
        assert_eq!(
            notifications,
            vec![Notification::Select {
                value: "a".to_string()
            }]
        );
        assert_eq!(state.selected_label(), Some("Alpha"));
        assert!(!state.is_open());
    }

    #[test]
    fn pointer_down_on_the_open_trigger_then_click_closes() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        reduce_select(&mut state, SelectAction::PointerDown { inside: true });
        reduce_select(&mut state, SelectAction::Toggle);
        assert!(!state.is_open());
    }

    #[test]
    fn pointer_down_outside_closes_without_selecting() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        assert!(reduce_select(&mut state, SelectAction::PointerDown { inside: false }).is_empty());
        assert!(!state.is_open());
        assert_eq!(state.selected_label(), None);
    }

    #[test]
    fn form_submission_honors_required_and_disabled() {
        let mut state = select_with(alpha_beta());
        state.required = true;
        assert!(state.value_missing());
        assert_eq!(state.submitted_value(), Some(""));

        reduce_select(&mut state, SelectAction::BindValue("a".to_string()));
        assert!(!state.value_missing());
        assert_eq!(state.submitted_value(), Some("a"));

        reduce_select(&mut state, SelectAction::SetDisabled(true));
        assert_eq!(state.submitted_value(), None);
        assert!(!state.value_missing());
    }

    #[test]
    fn dismiss_closes_without_selecting() {
        let mut state = select_with(alpha_beta());
        reduce_select(&mut state, SelectAction::Toggle);
        assert!(reduce_select(&mut state, SelectAction::Dismiss).is_empty());
        assert!(!state.is_open());
        assert_eq!(state.selected_label(), None);
    }

    #[test]
    fn attributes_route_through_the_reducer() {
        let mut state = select_with(alpha_beta());
        apply_attribute(&mut state, "value", Some("a")).expect("value");
        apply_attribute(&mut state, "invalid", Some("")).expect("invalid");
        assert_eq!(state.selected_label(), Some("Alpha"));
        assert_eq!(state.wrapper_class(), "ui-select-wrapper invalid");

        apply_attribute(&mut state, "disabled", Some("")).expect("disabled");
        reduce_select(&mut state, SelectAction::Toggle);
        assert!(!state.is_open());

        let mut child = OptionChild::default();
        apply_attribute(&mut child, "value", Some("z")).expect("value");
        apply_attribute(&mut child, "disabled", Some("")).expect("disabled");
        assert_eq!(child.value, "z");
        assert!(child.disabled);
    }
}
