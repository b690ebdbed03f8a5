use super::*;

use form_ui_core::{
    reduce_select, OptionChild, OptionResponder, OptionRow, SelectAction, SelectState,
    DEFAULT_PLACEHOLDER,
};

#[component]
/// Dropdown select over a list of option children.
///
/// The trigger shows the selected option's label, or the placeholder while
/// nothing is selected. Choosing an option updates `value`, closes the dropdown,
/// and emits `on-select` with the chosen value. Binding `value` or replacing
/// `options` resyncs the display silently.
pub fn Select(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional, into)] options: MaybeSignal<Vec<OptionChild>>,
    #[prop(into, default = MaybeSignal::Static(DEFAULT_PLACEHOLDER.to_string()))]
    placeholder: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] valid: MaybeSignal<bool>,
    #[prop(optional, into)] left_hint: MaybeSignal<String>,
    #[prop(optional, into)] right_hint: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let value = value.unwrap_or_else(|| create_rw_signal(String::new()));
    let host = create_node_ref::<html::Div>();
    let state = create_rw_signal(SelectState::new(element_identity(id, name)));

    let dispatch = Callback::new(move |action: SelectAction| {
        let mut next = state.get_untracked();
        let notifications = reduce_select(&mut next, action);

        if state.with_untracked(|current| *current != next) {
            let bound = next.value().to_string();
            state.set(next);
            if value.with_untracked(|current| *current != bound) {
                value.set(bound);
            }
        }

        for notification in notifications {
            dispatch_notification(host, &notification);
            if let (Notification::Select { value: chosen }, Some(on_select)) =
                (&notification, on_select)
            {
                on_select.call(chosen.clone());
            }
        }
    });

    create_effect(move |_| {
        let label = label.get();
        let placeholder = placeholder.get();
        let required = required.get();
        let invalid = invalid.get();
        let valid = valid.get();
        let left_hint = left_hint.get();
        let right_hint = right_hint.get();
        let unchanged = state.with_untracked(|select| {
            select.label == label
                && select.placeholder == placeholder
                && select.required == required
                && select.invalid == invalid
                && select.valid == valid
                && select.left_hint == left_hint
                && select.right_hint == right_hint
        });
        if !unchanged {
            state.update(|select| {
                select.label = label;
                select.placeholder = placeholder;
                select.required = required;
                select.invalid = invalid;
                select.valid = valid;
                select.left_hint = left_hint;
                select.right_hint = right_hint;
            });
        }
    });

    create_effect(move |_| dispatch.call(SelectAction::SetDisabled(disabled.get())));

    create_effect(move |_| {
        dispatch.call(SelectAction::ReplaceChildren(options.get()));
        state.with_untracked(|select| {
            if !select.value().is_empty() && select.selected().is_none() {
                logging::debug_warn!(
                    "select `{}`: value `{}` matches no enabled option",
                    select.identity.id,
                    select.value()
                );
            }
        });
    });

    create_effect(move |_| dispatch.call(SelectAction::BindValue(value.get())));

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if state.with_untracked(SelectState::is_open) {
            let inside = event_within(&ev, host);
            dispatch.call(SelectAction::PointerDown { inside });
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let activate = Callback::new(move |responder: OptionResponder| {
        dispatch.call(SelectAction::ActivateOption(responder));
    });

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-open=move || bool_token(state.with(SelectState::is_open))
            data-ui-disabled=move || bool_token(state.with(SelectState::is_disabled))
            on:keydown=move |ev| {
                if ev.key() == "Escape" && state.with_untracked(SelectState::is_open) {
                    ev.prevent_default();
                    dispatch.call(SelectAction::Dismiss);
                }
            }
        >
            {move || {
                let text = state.with(|select| select.label.clone());
                (!text.is_empty()).then(|| {
                    view! {
                        <InputLabel
                            text
                            required=Signal::derive(move || state.with(|select| select.required))
                            disabled=Signal::derive(move || state.with(SelectState::is_disabled))
                            for_id=Signal::derive(move || state.with(|select| select.identity.id.clone()))
                        />
                    }
                })
            }}
            <div
                id=move || state.with(|select| select.identity.id.clone())
                class=move || state.with(SelectState::wrapper_class)
                role="combobox"
                aria-haspopup="listbox"
                aria-expanded=move || bool_token(state.with(SelectState::is_open))
                aria-disabled=move || bool_token(state.with(SelectState::is_disabled))
                aria-required=move || bool_token(state.with(|select| select.required))
                tabindex=move || if state.with(SelectState::is_disabled) { -1 } else { 0 }
                on:click:undelegated=move |ev| {
                    ev.stop_propagation();
                    dispatch.call(SelectAction::Toggle);
                }
                on:keydown=move |ev| {
                    if matches!(ev.key().as_str(), "Enter" | " ") {
                        ev.prevent_default();
                        dispatch.call(SelectAction::Toggle);
                    }
                }
            >
                <span
                    class="ui-select-value"
                    data-ui-placeholder=move || bool_token(state.with(|select| select.selected().is_none()))
                >
                    {move || state.with(|select| select.display_text().to_string())}
                </span>
                <Icon
                    name=Signal::derive(move || state.with(|select| select.chevron_icon().to_string()))
                    class="ui-select-chevron"
                />
            </div>
            <div class=move || state.with(SelectState::dropdown_class) role="listbox">
                {move || {
                    state
                        .with(SelectState::option_rows)
                        .into_iter()
                        .map(|row| view! { <SelectOption row on_activate=activate /> })
                        .collect_view()
                }}
            </div>
            <input
                type="text"
                class="ui-select-native"
                style="position:absolute;width:1px;height:1px;opacity:0;pointer-events:none"
                tabindex="-1"
                aria-hidden="true"
                name=move || state.with(|select| select.identity.name.clone())
                prop:value=move || {
                    state.with(|select| select.submitted_value().unwrap_or_default().to_string())
                }
                required=move || state.with(|select| select.required)
                disabled=move || state.with(SelectState::is_disabled)
                data-ui-value-missing=move || bool_token(state.with(SelectState::value_missing))
            />
            {hint_row(
                "ui-select-hints",
                Signal::derive(move || state.with(|select| select.left_hint.clone())),
                Signal::derive(move || state.with(|select| select.right_hint.clone())),
            )}
        </div>
    }
}

#[component]
/// One row of a [`Select`] dropdown.
///
/// Disabled rows render without a responder and ignore clicks.
pub fn SelectOption(row: OptionRow, on_activate: Callback<OptionResponder>) -> impl IntoView {
    let OptionRow {
        child,
        responder,
        selected,
    } = row;
    let disabled = responder.is_none();
    let class = if selected {
        "ui-select-option selected"
    } else if disabled {
        "ui-select-option disabled"
    } else {
        "ui-select-option"
    };

    view! {
        <div
            class=class
            role="option"
            aria-selected=bool_token(selected)
            aria-disabled=bool_token(disabled)
            data-ui-primitive="true"
            data-ui-kind="select-option"
            data-ui-value=child.value.clone()
            data-ui-selected=bool_token(selected)
            data-ui-disabled=bool_token(disabled)
            on:click:undelegated=move |ev| {
                ev.stop_propagation();
                if let Some(responder) = responder.clone() {
                    on_activate.call(responder);
                }
            }
        >
            {child.resolved_label().to_string()}
        </div>
    }
}
