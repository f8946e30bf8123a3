//! Entry Carousel Component
//!
//! Pages through stored entries one card at a time, newest first.
//! Navigation works through the arrow buttons, the dot row, or a
//! horizontal swipe.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::carousel::{self, BrowseState, NavRequest, SlideDirection, SLIDE_OUT_MS};
use crate::context::AppContext;

/// Long-form date for a card, e.g. "Friday, August 8, 2026"
fn format_entry_date(created_at: i64) -> String {
    match chrono::DateTime::from_timestamp(created_at, 0) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// One-at-a-time browser over the stored entries
#[component]
pub fn EntryCarousel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(BrowseState::Loading);
    let (index, set_index) = signal(0usize);
    let (slide, set_slide) = signal::<Option<SlideDirection>>(None);
    // Generation guard: a deferred apply only lands if no newer
    // navigation was scheduled while its timer ran.
    let nav_epoch = StoredValue::new(0u32);
    let touch_start_x = StoredValue::new(None::<f64>);

    // Fetch on mount and again whenever a new entry is saved
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        // A refetch obsoletes any pending deferred navigation
        nav_epoch.update_value(|v| *v += 1);
        set_slide.set(None);
        set_state.set(BrowseState::Loading);
        spawn_local(async move {
            let fetched = api::list_entries().await.map_err(|e| {
                web_sys::console::error_1(&format!("load failed: {}", e).into());
                "Could not load your entries.".to_string()
            });
            set_state.set(BrowseState::from_fetch(fetched));
            set_index.set(0);
        });
    });

    let apply = move |target: usize, direction: SlideDirection| {
        set_slide.set(Some(direction));
        nav_epoch.update_value(|v| *v += 1);
        let epoch = nav_epoch.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SLIDE_OUT_MS).await;
            if nav_epoch.get_value() == epoch {
                set_index.set(target);
                set_slide.set(None);
            }
        });
    };

    let navigate = move |request: NavRequest| {
        let len = state.with(|s| s.entries().len());
        if let Some((target, direction)) = carousel::step(index.get(), len, request) {
            apply(target, direction);
        }
    };

    let jump_to = move |dot: usize| {
        let len = state.with(|s| s.entries().len());
        if let Some((target, direction)) = carousel::jump(index.get(), dot, len) {
            apply(target, direction);
        }
    };

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            touch_start_x.set_value(Some(touch.client_x() as f64));
        }
    };

    let on_touch_end = move |ev: web_sys::TouchEvent| {
        let Some(start) = touch_start_x.get_value() else {
            return;
        };
        if let Some(touch) = ev.changed_touches().get(0) {
            let delta = start - touch.client_x() as f64;
            if let Some(request) = carousel::swipe(delta) {
                navigate(request);
            }
        }
        touch_start_x.set_value(None);
    };

    view! {
        <div class="carousel-container">
            {move || match state.get() {
                BrowseState::Loading => view! {
                    <div class="carousel-state">
                        <div class="loader"></div>
                        <p>"Loading entries..."</p>
                    </div>
                }
                    .into_any(),
                BrowseState::Failed(message) => view! {
                    <div class="carousel-state">
                        <span class="state-icon">"!"</span>
                        <p>{message}</p>
                    </div>
                }
                    .into_any(),
                BrowseState::Empty => view! {
                    <div class="carousel-state">
                        <p>"No entries recorded yet."</p>
                        <p class="state-hint">"Start today with the first one!"</p>
                    </div>
                }
                    .into_any(),
                BrowseState::Ready(entries) => {
                    let len = entries.len();
                    let current = index.get().min(len - 1);
                    let entry = entries[current].clone();
                    let at_first = current == 0;
                    let at_last = current + 1 == len;

                    view! {
                        <div class="carousel-header">
                            <h2 class="carousel-title">"My Learnings"</h2>
                            <p class="carousel-subtitle">
                                {format!("{} of {}", current + 1, len)}
                            </p>
                        </div>

                        <div class="carousel-stage">
                            <button
                                class=if at_first {
                                    "carousel-arrow arrow-left disabled"
                                } else {
                                    "carousel-arrow arrow-left"
                                }
                                disabled=at_first
                                on:click=move |_| navigate(NavRequest::Previous)
                                aria-label="Previous"
                            >
                                "‹"
                            </button>

                            <div
                                class=move || match slide.get() {
                                    Some(direction) => format!("carousel-card {}", direction.class()),
                                    None => "carousel-card".to_string(),
                                }
                                on:touchstart=on_touch_start
                                on:touchend=on_touch_end
                            >
                                <div class="card-date">
                                    <span class="date-dot"></span>
                                    {format_entry_date(entry.created_at)}
                                </div>
                                <h3 class="card-title">{entry.title.clone()}</h3>
                                <p class="card-description">{entry.description.clone()}</p>
                            </div>

                            <button
                                class=if at_last {
                                    "carousel-arrow arrow-right disabled"
                                } else {
                                    "carousel-arrow arrow-right"
                                }
                                disabled=at_last
                                on:click=move |_| navigate(NavRequest::Next)
                                aria-label="Next"
                            >
                                "›"
                            </button>
                        </div>

                        <div class="carousel-dots">
                            {(0..len)
                                .map(|dot| {
                                    view! {
                                        <button
                                            class=if dot == current { "dot dot-active" } else { "dot" }
                                            on:click=move |_| jump_to(dot)
                                            aria-label=format!("Go to entry {}", dot + 1)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_date_long_form() {
        // 2026-08-08 is a Saturday
        let formatted = format_entry_date(1786147200);
        assert_eq!(formatted, "Saturday, August 8, 2026");
    }

    #[test]
    fn test_format_entry_date_out_of_range() {
        assert_eq!(format_entry_date(i64::MAX), "");
    }
}
