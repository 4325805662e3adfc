use leptos::prelude::*;

use crate::core::Glyph;
use crate::ui::icon::Icon;

/// Labelled input with a leading icon
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Icon drawn inside the input
    glyph: Glyph,
    /// Whether the browser must see a value before submitting
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="input-wrapper">
                <Icon glyph=glyph size=18 />
                <input
                    type=input_type
                    required=required
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Labelled text area with a leading icon
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Icon drawn inside the text area
    glyph: Glyph,
    /// Whether the browser must see a value before submitting
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="input-wrapper textarea-wrapper">
                <Icon glyph=glyph size=18 />
                <textarea
                    required=required
                    rows=rows
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
