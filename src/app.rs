//! Learning Log Frontend App
//!
//! Main application component: a tab switch between the entry form and
//! the carousel.

use leptos::prelude::*;

use crate::components::{EntryCarousel, EntryForm};
use crate::context::AppContext;

/// Which tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveView {
    Record,
    Browse,
}

#[component]
pub fn App() -> impl IntoView {
    let (active_view, set_active_view) = signal(ActiveView::Record);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    view! {
        <div class="app-layout">
            <nav class="view-tabs">
                <button
                    class=move || {
                        if active_view.get() == ActiveView::Record { "tab active" } else { "tab" }
                    }
                    on:click=move |_| set_active_view.set(ActiveView::Record)
                >
                    "New entry"
                </button>
                <button
                    class=move || {
                        if active_view.get() == ActiveView::Browse { "tab active" } else { "tab" }
                    }
                    on:click=move |_| set_active_view.set(ActiveView::Browse)
                >
                    "My learnings"
                </button>
            </nav>

            <main class="main-content">
                {move || match active_view.get() {
                    ActiveView::Record => view! { <EntryForm /> }.into_any(),
                    ActiveView::Browse => view! { <EntryCarousel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
