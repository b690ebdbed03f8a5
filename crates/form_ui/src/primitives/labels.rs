use super::*;

use form_ui_core::{HintTextModel, InputLabelModel};

#[component]
/// Field label with an optional required marker.
pub fn InputLabel(
    #[prop(into, default = MaybeSignal::Static("Label".to_string()))] text: MaybeSignal<String>,
    #[prop(optional, into)] color: MaybeSignal<ColorIntent>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Id of the control this label names.
    #[prop(optional, into)]
    for_id: MaybeSignal<String>,
) -> impl IntoView {
    let model = Signal::derive(move || InputLabelModel {
        text: text.get(),
        color: Some(color.get()),
        required: required.get(),
        disabled: disabled.get(),
    });

    view! {
        <label
            class=move || model.with(InputLabelModel::class)
            for=move || for_id.get()
            data-ui-primitive="true"
            data-ui-kind="input-label"
            data-ui-disabled=move || bool_token(model.with(|label| label.disabled))
        >
            {move || model.with(|label| label.text.clone())}
            {move || {
                model
                    .with(InputLabelModel::required_marker)
                    .map(|marker| view! { <span class="required">{marker}</span> })
            }}
        </label>
    }
}

#[component]
/// Short helper text under a control.
pub fn HintText(
    #[prop(optional, into)] text: MaybeSignal<String>,
    #[prop(optional, into)] color: MaybeSignal<ColorIntent>,
) -> impl IntoView {
    let model = Signal::derive(move || HintTextModel {
        text: text.get(),
        color: Some(color.get()),
    });

    view! {
        <span
            class=move || model.with(HintTextModel::class)
            data-ui-primitive="true"
            data-ui-kind="hint-text"
        >
            {move || model.with(|hint| hint.text.clone())}
        </span>
    }
}
