//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after a successful save so the carousel refetches - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after a successful save so the carousel refetches - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Signal that the set of stored entries changed
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
