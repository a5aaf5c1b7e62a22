//! Input Component
//!
//! Text input wrapped in its own block.

use leptos::prelude::*;

/// Single-line input forwarding its configuration to a native `<input>`
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <input
                type=input_type
                class=class
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
