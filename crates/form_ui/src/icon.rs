//! Icon-font glyph element.
//!
//! Glyphs come from the Iconoir icon font: the element renders
//! `<i class="iconoir-{name}">` and leaves glyph shapes to the font stylesheet
//! loaded by the host page.

use form_ui_core::IconModel;
use leptos::*;

#[component]
/// Named icon-font glyph.
pub fn Icon(
    /// Glyph name, e.g. `check` or `nav-arrow-down`.
    #[prop(into)]
    name: MaybeSignal<String>,
    /// Extra classes on the host span.
    #[prop(optional, into)]
    class: MaybeSignal<String>,
) -> impl IntoView {
    let model = Signal::derive(move || IconModel::named(name.get()));

    view! {
        <span
            class=move || {
                let extra = class.get();
                if extra.is_empty() {
                    "ui-icon".to_string()
                } else {
                    format!("ui-icon {extra}")
                }
            }
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=move || model.with(|icon| icon.name.clone())
        >
            <i class=move || model.with(IconModel::glyph_class)></i>
        </span>
    }
}
