//! Button Component
//!
//! Native button wrapped in its own block. Label comes from children.

use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<web_sys::MouseEvent>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <button
                type=button_type
                class=class
                disabled=move || disabled.get()
                on:click=move |ev| on_click.run(ev)
            >
                {children()}
            </button>
        </div>
    }
}
