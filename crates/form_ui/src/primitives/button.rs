use super::*;

use form_ui_core::{ButtonModel, ButtonType};

#[component]
/// Action button with color intent, loading state, and icon slots.
///
/// Emits `clicked` on activation unless disabled or loading.
pub fn Button(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] button_type: MaybeSignal<ButtonType>,
    #[prop(into, default = MaybeSignal::Static("Button".to_string()))] text: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] color: MaybeSignal<ColorIntent>,
    #[prop(optional, into)] left_icon: MaybeSignal<String>,
    #[prop(optional, into)] right_icon: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_clicked: Option<Callback<()>>,
) -> impl IntoView {
    let identity = element_identity(id, name);
    let host = create_node_ref::<html::Div>();
    let model = Signal::derive(move || ButtonModel {
        identity: identity.clone(),
        button_type: Some(button_type.get()),
        text: text.get(),
        disabled: disabled.get(),
        loading: loading.get(),
        color: Some(color.get()),
        left_icon: left_icon.get(),
        right_icon: right_icon.get(),
    });

    view! {
        <div
            node_ref=host
            class=merge_layout_class("ui-button-host", layout_class)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-disabled=move || bool_token(model.with(|button| button.disabled))
            data-ui-loading=move || bool_token(model.with(|button| button.loading))
        >
            <button
                type=move || model.with(|button| button.button_type.map(ButtonType::token))
                id=move || model.with(|button| button.identity.id.clone())
                name=move || model.with(|button| button.identity.name.clone())
                class=move || model.with(ButtonModel::class)
                disabled=move || model.with(|button| button.disabled)
                aria-busy=move || bool_token(model.with(|button| button.loading))
                on:click:undelegated=move |ev| {
                    ev.stop_propagation();
                    let mut button = model.get_untracked();
                    if let Some(notification) = button.handle(ControlEvent::Click) {
                        notify(host, &notification, on_clicked, ());
                    }
                }
            >
                {move || {
                    model
                        .with(|button| button.left_icon().map(str::to_string))
                        .map(|name| view! { <Icon name class="ui-button-icon left" /> })
                }}
                <span class="ui-button-text">{move || model.with(|button| button.text.clone())}</span>
                {move || {
                    model
                        .with(|button| button.right_icon().map(str::to_string))
                        .map(|name| view! { <Icon name class="ui-button-icon right" /> })
                }}
                {move || {
                    model
                        .with(|button| button.loading)
                        .then(|| view! { <span class="ui-button-spinner" aria-hidden="true"></span> })
                }}
            </button>
        </div>
    }
}
