use super::*;

use form_ui_core::{InputType, TextInputModel, TextareaModel};

/// Outward callbacks shared by the text controls. Each receives the current value.
#[derive(Clone, Copy)]
struct TextCallbacks {
    on_input: Option<Callback<String>>,
    on_change: Option<Callback<String>>,
    on_focus: Option<Callback<String>>,
    on_blur: Option<Callback<String>>,
    on_copy: Option<Callback<String>>,
    on_cut: Option<Callback<String>>,
    on_paste: Option<Callback<String>>,
}

impl TextCallbacks {
    fn for_notification(self, notification: &Notification) -> Option<Callback<String>> {
        match notification {
            Notification::Input => self.on_input,
            Notification::Change => self.on_change,
            Notification::Focus => self.on_focus,
            Notification::Blur => self.on_blur,
            Notification::Copy => self.on_copy,
            Notification::Cut => self.on_cut,
            Notification::Paste => self.on_paste,
            _ => None,
        }
    }

    /// Mirrors `mirrored` into `value`, then delivers `notification`.
    fn deliver(
        self,
        host: NodeRef<html::Div>,
        value: RwSignal<String>,
        mirrored: String,
        notification: Option<Notification>,
    ) {
        let Some(notification) = notification else {
            return;
        };
        if value.with_untracked(|current| *current != mirrored) {
            value.set(mirrored.clone());
        }
        notify(host, &notification, self.for_notification(&notification), mirrored);
    }
}

#[component]
/// Single-line text input with label, adornments, validation state, and hints.
///
/// Typing updates `value` before `input` is emitted. Read-only inputs forward
/// only focus and clipboard events; disabled inputs forward nothing.
pub fn TextInput(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] input_type: MaybeSignal<InputType>,
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] valid: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<String>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] left_icon: MaybeSignal<String>,
    #[prop(optional, into)] right_icon: MaybeSignal<String>,
    #[prop(optional, into)] prefix: MaybeSignal<String>,
    #[prop(optional, into)] suffix: MaybeSignal<String>,
    #[prop(optional, into)] left_hint: MaybeSignal<String>,
    #[prop(optional, into)] right_hint: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<String>>,
    #[prop(optional)] on_copy: Option<Callback<String>>,
    #[prop(optional)] on_cut: Option<Callback<String>>,
    #[prop(optional)] on_paste: Option<Callback<String>>,
) -> impl IntoView {
    let identity = element_identity(id, name);
    let value = value.unwrap_or_else(|| create_rw_signal(String::new()));
    let host = create_node_ref::<html::Div>();
    let callbacks = TextCallbacks {
        on_input,
        on_change,
        on_focus,
        on_blur,
        on_copy,
        on_cut,
        on_paste,
    };
    let model = Signal::derive(move || TextInputModel {
        identity: identity.clone(),
        input_type: Some(input_type.get()),
        value: value.get(),
        placeholder: placeholder.get(),
        disabled: disabled.get(),
        required: required.get(),
        readonly: readonly.get(),
        invalid: invalid.get(),
        valid: valid.get(),
        error_message: error_message.get(),
        label: label.get(),
        left_icon: left_icon.get(),
        right_icon: right_icon.get(),
        prefix: prefix.get(),
        suffix: suffix.get(),
        left_hint: left_hint.get(),
        right_hint: right_hint.get(),
    });
    // Bubbling native events are stopped at the control (undelegated
    // listeners); the outward events reuse their names.
    let forward = move |event: ControlEvent| {
        let mut input = model.get_untracked();
        let notification = input.handle(event);
        callbacks.deliver(host, value, input.value, notification);
    };

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-text-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-disabled=move || bool_token(model.with(|input| input.disabled))
            data-ui-readonly=move || bool_token(model.with(|input| input.readonly))
        >
            {move || {
                model
                    .with(|input| input.label().map(str::to_string))
                    .map(|text| {
                        view! {
                            <InputLabel
                                text
                                required=Signal::derive(move || model.with(|input| input.required))
                                disabled=Signal::derive(move || model.with(|input| input.disabled))
                                for_id=Signal::derive(move || model.with(|input| input.identity.id.clone()))
                            />
                        }
                    })
            }}
            <div class=move || model.with(TextInputModel::wrapper_class)>
                {move || {
                    model
                        .with(|input| input.left_icon().map(str::to_string))
                        .map(|name| view! { <Icon name class="ui-text-input-icon left" /> })
                }}
                {move || {
                    model
                        .with(|input| input.prefix().map(str::to_string))
                        .map(|text| view! { <span class="ui-text-input-prefix">{text}</span> })
                }}
                <input
                    type=move || model.with(|input| input.input_type.map(InputType::token))
                    id=move || model.with(|input| input.identity.id.clone())
                    name=move || model.with(|input| input.identity.name.clone())
                    class="ui-text-input-control"
                    prop:value=move || value.get()
                    placeholder=move || model.with(|input| input.placeholder.clone())
                    disabled=move || model.with(|input| input.disabled)
                    readonly=move || model.with(|input| input.readonly)
                    required=move || model.with(|input| input.required)
                    aria-invalid=move || bool_token(model.with(|input| input.invalid))
                    on:input:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(input_event(&ev));
                    }
                    on:change:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Change);
                    }
                    on:focus=move |_| forward(ControlEvent::Focus)
                    on:blur=move |_| forward(ControlEvent::Blur)
                    on:copy:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Copy);
                    }
                    on:cut:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Cut);
                    }
                    on:paste:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Paste);
                    }
                />
                {move || {
                    model
                        .with(|input| input.suffix().map(str::to_string))
                        .map(|text| view! { <span class="ui-text-input-suffix">{text}</span> })
                }}
                {move || {
                    model
                        .with(|input| input.right_icon().map(str::to_string))
                        .map(|name| view! { <Icon name class="ui-text-input-icon right" /> })
                }}
            </div>
            {error_line(Signal::derive(move || model.with(|input| input.error_message.clone())))}
            {hint_row(
                "ui-text-input-hints",
                Signal::derive(move || model.with(|input| input.left_hint.clone())),
                Signal::derive(move || model.with(|input| input.right_hint.clone())),
            )}
        </div>
    }
}

#[component]
/// Multi-line text area with label, validation state, and hints.
///
/// Shares the event rules of [`TextInput`].
pub fn Textarea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] valid: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<String>,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] left_hint: MaybeSignal<String>,
    #[prop(optional, into)] right_hint: MaybeSignal<String>,
    /// Visible text rows.
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<String>>,
    #[prop(optional)] on_copy: Option<Callback<String>>,
    #[prop(optional)] on_cut: Option<Callback<String>>,
    #[prop(optional)] on_paste: Option<Callback<String>>,
) -> impl IntoView {
    let identity = element_identity(id, name);
    let value = value.unwrap_or_else(|| create_rw_signal(String::new()));
    let host = create_node_ref::<html::Div>();
    let callbacks = TextCallbacks {
        on_input,
        on_change,
        on_focus,
        on_blur,
        on_copy,
        on_cut,
        on_paste,
    };
    let model = Signal::derive(move || TextareaModel {
        identity: identity.clone(),
        value: value.get(),
        placeholder: placeholder.get(),
        disabled: disabled.get(),
        readonly: readonly.get(),
        required: required.get(),
        invalid: invalid.get(),
        valid: valid.get(),
        error_message: error_message.get(),
        label: label.get(),
        left_hint: left_hint.get(),
        right_hint: right_hint.get(),
    });
    let forward = move |event: ControlEvent| {
        let mut textarea = model.get_untracked();
        let notification = textarea.handle(event);
        callbacks.deliver(host, value, textarea.value, notification);
    };

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-textarea", layout_class)
            data-ui-primitive="true"
            data-ui-kind="textarea"
            data-ui-disabled=move || bool_token(model.with(|textarea| textarea.disabled))
            data-ui-readonly=move || bool_token(model.with(|textarea| textarea.readonly))
        >
            {move || {
                model
                    .with(|textarea| textarea.label().map(str::to_string))
                    .map(|text| {
                        view! {
                            <InputLabel
                                text
                                required=Signal::derive(move || model.with(|textarea| textarea.required))
                                disabled=Signal::derive(move || model.with(|textarea| textarea.disabled))
                                for_id=Signal::derive(move || model.with(|textarea| textarea.identity.id.clone()))
                            />
                        }
                    })
            }}
            <div class=move || model.with(TextareaModel::wrapper_class)>
                <textarea
                    id=move || model.with(|textarea| textarea.identity.id.clone())
                    name=move || model.with(|textarea| textarea.identity.name.clone())
                    class="ui-textarea-control"
                    rows=rows
                    prop:value=move || value.get()
                    placeholder=move || model.with(|textarea| textarea.placeholder.clone())
                    disabled=move || model.with(|textarea| textarea.disabled)
                    readonly=move || model.with(|textarea| textarea.readonly)
                    required=move || model.with(|textarea| textarea.required)
                    aria-invalid=move || bool_token(model.with(|textarea| textarea.invalid))
                    on:input:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(input_event(&ev));
                    }
                    on:change:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Change);
                    }
                    on:focus=move |_| forward(ControlEvent::Focus)
                    on:blur=move |_| forward(ControlEvent::Blur)
                    on:copy:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Copy);
                    }
                    on:cut:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Cut);
                    }
                    on:paste:undelegated=move |ev| {
                        ev.stop_propagation();
                        forward(ControlEvent::Paste);
                    }
                ></textarea>
            </div>
            {error_line(Signal::derive(move || model.with(|textarea| textarea.error_message.clone())))}
            {hint_row(
                "ui-textarea-hints",
                Signal::derive(move || model.with(|textarea| textarea.left_hint.clone())),
                Signal::derive(move || model.with(|textarea| textarea.right_hint.clone())),
            )}
        </div>
    }
}
