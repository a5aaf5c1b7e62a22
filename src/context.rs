//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the complaint list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the complaint list - write
    set_reload_trigger: WriteSignal<u32>,
    /// API endpoints
    pub config: StoredValue<ApiConfig>,
    /// Revoked when the app is torn down
    pub lifetime: StoredValue<LifetimeToken>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: ApiConfig,
        lifetime: LifetimeToken,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            lifetime: StoredValue::new(lifetime),
        }
    }

    /// Trigger a reload of the complaint list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Cloned handles for an async task
    pub fn task_handles(&self) -> Option<(ApiConfig, LifetimeToken)> {
        let config = self.config.try_get_value()?;
        let lifetime = self.lifetime.try_get_value()?;
        Some((config, lifetime))
    }
}

/// Shared flag telling async completions whether their owner still exists.
#[derive(Clone, Debug)]
pub struct LifetimeToken(Arc<AtomicBool>);

impl LifetimeToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}
