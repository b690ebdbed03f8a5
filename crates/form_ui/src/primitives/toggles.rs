use super::*;

use form_ui_core::{CheckboxModel, RadioButtonModel};

#[component]
/// Checkbox with label, indeterminate glyph, error message, and hints.
///
/// The native checked state is copied into `checked` before `checked` is
/// emitted, so listeners always read the new state.
pub fn Checkbox(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<String>,
    #[prop(optional)] checked: Option<RwSignal<bool>>,
    #[prop(optional, into)] rtl: MaybeSignal<bool>,
    #[prop(optional, into)] color: MaybeSignal<ColorIntent>,
    #[prop(optional, into)] left_hint: MaybeSignal<String>,
    #[prop(optional, into)] right_hint: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_checked: Option<Callback<bool>>,
) -> impl IntoView {
    let identity = element_identity(id, name);
    let checked = checked.unwrap_or_else(|| create_rw_signal(false));
    let host = create_node_ref::<html::Div>();
    let model = Signal::derive(move || CheckboxModel {
        identity: identity.clone(),
        value: value.get(),
        label: label.get(),
        disabled: disabled.get(),
        required: required.get(),
        indeterminate: indeterminate.get(),
        error_message: error_message.get(),
        checked: checked.get(),
        rtl: rtl.get(),
        color: Some(color.get()),
        left_hint: left_hint.get(),
        right_hint: right_hint.get(),
    });
    let icon_name = Signal::derive(move || model.with(|checkbox| checkbox.icon_name().to_string()));
    let icon_class = Signal::derive(move || model.with(CheckboxModel::icon_class));

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-checked=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(model.with(|checkbox| checkbox.disabled))
        >
            <div class=move || model.with(CheckboxModel::wrapper_class)>
                <span class="ui-checkbox-box">
                    <input
                        type="checkbox"
                        id=move || model.with(|checkbox| checkbox.identity.id.clone())
                        name=move || model.with(|checkbox| checkbox.identity.name.clone())
                        value=move || model.with(|checkbox| checkbox.value.clone())
                        class=move || model.with(CheckboxModel::control_class)
                        prop:checked=move || checked.get()
                        prop:indeterminate=move || model.with(|checkbox| checkbox.indeterminate)
                        disabled=move || model.with(|checkbox| checkbox.disabled)
                        required=move || model.with(|checkbox| checkbox.required)
                        on:input:undelegated=move |ev| {
                            ev.stop_propagation();
                            let mut checkbox = model.get_untracked();
                            let native = event_target_checked(&ev);
                            if let Some(notification) = checkbox.handle(ControlEvent::Toggle(native)) {
                                checked.set(checkbox.checked);
                                notify(host, &notification, on_checked, checkbox.checked);
                            }
                        }
                        on:change:undelegated=move |ev| ev.stop_propagation()
                    />
                    <Icon name=icon_name class=icon_class />
                </span>
                {move || {
                    model
                        .with(|checkbox| checkbox.label().map(str::to_string))
                        .map(|text| {
                            view! {
                                <label
                                    class=move || model.with(CheckboxModel::label_class)
                                    for=move || model.with(|checkbox| checkbox.identity.id.clone())
                                >
                                    {text}
                                </label>
                            }
                        })
                }}
            </div>
            {error_line(Signal::derive(move || model.with(|checkbox| checkbox.error_message.clone())))}
            {hint_row(
                "ui-checkbox-hints",
                Signal::derive(move || model.with(|checkbox| checkbox.left_hint.clone())),
                Signal::derive(move || model.with(|checkbox| checkbox.right_hint.clone())),
            )}
        </div>
    }
}

#[component]
/// Radio button with label, validation state, error message, and hints.
///
/// Radios sharing a `name` form one native group.
pub fn RadioButton(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] valid: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<String>,
    #[prop(optional)] checked: Option<RwSignal<bool>>,
    #[prop(optional, into)] rtl: MaybeSignal<bool>,
    #[prop(optional, into)] color: MaybeSignal<ColorIntent>,
    #[prop(optional, into)] left_hint: MaybeSignal<String>,
    #[prop(optional, into)] right_hint: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_checked: Option<Callback<bool>>,
) -> impl IntoView {
    let identity = element_identity(id, name);
    let checked = checked.unwrap_or_else(|| create_rw_signal(false));
    let host = create_node_ref::<html::Div>();
    let model = Signal::derive(move || RadioButtonModel {
        identity: identity.clone(),
        value: value.get(),
        label: label.get(),
        disabled: disabled.get(),
        required: required.get(),
        invalid: invalid.get(),
        valid: valid.get(),
        error_message: error_message.get(),
        checked: checked.get(),
        rtl: rtl.get(),
        color: Some(color.get()),
        left_hint: left_hint.get(),
        right_hint: right_hint.get(),
    });

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-radio-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio-button"
            data-ui-checked=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(model.with(|radio| radio.disabled))
        >
            <div class=move || model.with(RadioButtonModel::wrapper_class)>
                <input
                    type="radio"
                    id=move || model.with(|radio| radio.identity.id.clone())
                    name=move || model.with(|radio| radio.identity.name.clone())
                    value=move || model.with(|radio| radio.value.clone())
                    class=move || model.with(RadioButtonModel::control_class)
                    prop:checked=move || checked.get()
                    disabled=move || model.with(|radio| radio.disabled)
                    required=move || model.with(|radio| radio.required)
                    on:input:undelegated=move |ev| {
                        ev.stop_propagation();
                        let mut radio = model.get_untracked();
                        let native = event_target_checked(&ev);
                        if let Some(notification) = radio.handle(ControlEvent::Toggle(native)) {
                            checked.set(radio.checked);
                            notify(host, &notification, on_checked, radio.checked);
                        }
                    }
                    on:change:undelegated=move |ev| ev.stop_propagation()
                />
                {move || {
                    model
                        .with(|radio| radio.label().map(str::to_string))
                        .map(|text| {
                            view! {
                                <label
                                    class=move || model.with(RadioButtonModel::label_class)
                                    for=move || model.with(|radio| radio.identity.id.clone())
                                >
                                    {text}
                                </label>
                            }
                        })
                }}
            </div>
            {error_line(Signal::derive(move || model.with(|radio| radio.error_message.clone())))}
            {hint_row(
                "ui-radio-button-hints",
                Signal::derive(move || model.with(|radio| radio.left_hint.clone())),
                Signal::derive(move || model.with(|radio| radio.right_hint.clone())),
            )}
        </div>
    }
}
