//! Complaint Board App
//!
//! Root container: owns the state store and loads the complaint list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ComplaintForm, ComplaintList};
use crate::config::ApiConfig;
use crate::context::{AppContext, LifetimeToken};
use crate::store::{ComplaintState, ComplaintStore};

#[component]
pub fn App() -> impl IntoView {
    let store: ComplaintStore = Store::new(ComplaintState::default());
    let lifetime = LifetimeToken::new();
    let ctx = AppContext::new(signal(0u32), ApiConfig::from_build_env(), lifetime.clone());

    provide_context(store);
    provide_context(ctx);

    // Late completions must not touch a torn-down store
    on_cleanup(move || lifetime.revoke());

    // Load complaints on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some((config, lifetime)) = ctx.task_handles() else { return };
        let Some(ticket) = store.try_update(|s| s.begin_fetch()) else { return };
        web_sys::console::log_1(&format!("[APP] Loading complaints, trigger={}", trigger).into());

        spawn_local(async move {
            let result = api::fetch_complaints(&config).await;
            if !lifetime.is_alive() {
                return;
            }
            match &result {
                Ok(loaded) => web_sys::console::log_1(&format!("[APP] Loaded {} complaints", loaded.len()).into()),
                Err(e) => web_sys::console::error_1(&format!("[APP] Loading complaints failed: {}", e).into()),
            }
            let applied = store.try_update(|s| s.finish_fetch(ticket, result)).unwrap_or(false);
            if !applied {
                web_sys::console::log_1(&"[APP] Dropped stale complaint list".into());
            }
        });
    });

    view! {
        <div class="wrapper">
            <h2>"Submit a Complaint"</h2>
            <ComplaintForm />

            <h2>"Complaints List"</h2>
            <ComplaintList />
        </div>
    }
}
