//! Complaint List Component
//!
//! Loading indicator, complaint blocks or the empty-state message.

use leptos::prelude::*;

use crate::models::Complaint;
use crate::store::{use_complaint_store, ComplaintStateStoreFields, ListStatus};

#[component]
pub fn ComplaintList() -> impl IntoView {
    let store = use_complaint_store();

    let status = move || {
        ListStatus::derive(
            store.is_loading().get(),
            store.complaints().with(|c| c.len()),
        )
    };

    let items = move || match status() {
        ListStatus::Loading => view! { <div>"Loading..."</div> }.into_any(),
        ListStatus::Empty => view! { <p>"No complaints available."</p> }.into_any(),
        ListStatus::Populated => view! {
            <For
                each=move || store.complaints().get()
                key=|complaint: &Complaint| complaint.id.clone()
                children=move |complaint: Complaint| view! {
                    <div class="complain-item" data-id=complaint.id.to_string()>
                        <h3>{complaint.title}</h3>
                        <p>{complaint.body}</p>
                    </div>
                }
            />
        }.into_any(),
    };

    view! {
        {move || store.fetch_error().get().map(|message| view! {
            <p class="error-message">{message}</p>
        })}
        {items}
    }
}
