//! Card Component

use leptos::prelude::*;

/// Container block rendering its children
#[component]
pub fn Card(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class>
            {children()}
        </div>
    }
}
