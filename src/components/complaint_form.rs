//! Complaint Form Component
//!
//! Title and body drafts, submit control and error display.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Button, Card, Input, TextArea};
use crate::api;
use crate::context::AppContext;
use crate::store::{submit_label, use_complaint_store, ComplaintStateStoreFields};

#[component]
pub fn ComplaintForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_complaint_store();

    let submit = move |_ev: web_sys::MouseEvent| {
        let Some((config, lifetime)) = ctx.task_handles() else { return };
        // Nothing to send if a save is already running
        let Some(Some(payload)) = store.try_update(|s| s.begin_save()) else {
            web_sys::console::log_1(&"[FORM] Save already in flight, click ignored".into());
            return;
        };

        spawn_local(async move {
            let result = api::save_complaint(&config, &payload).await;
            if !lifetime.is_alive() {
                return;
            }
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[FORM] Save failed: {}", e).into());
            }
            if store.try_update(|s| s.finish_save(result)).unwrap_or(false) {
                ctx.reload();
            }
        });
    };

    let is_saving = Signal::derive(move || store.is_saving().get());

    view! {
        <Card class="complain-form">
            <Input
                placeholder="Title"
                value=Signal::derive(move || store.title_draft().get())
                on_input=move |v: String| store.title_draft().set(v)
            />
            <TextArea
                placeholder="Enter your complaint"
                value=Signal::derive(move || store.body_draft().get())
                on_input=move |v: String| store.body_draft().set(v)
            />

            <Button on_click=submit disabled=is_saving>
                {move || submit_label(is_saving.get())}
            </Button>

            {move || store.save_error().get().map(|message| view! {
                <p class="error-message">{message}</p>
            })}
        </Card>
    }
}
