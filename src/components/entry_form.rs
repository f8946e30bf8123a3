//! Entry Form Component
//!
//! Form for recording a new learning entry.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateEntryArgs};
use crate::context::AppContext;
use crate::models::{DESCRIPTION_MAX, TITLE_MAX};

/// How long a save outcome stays on screen before auto-dismissing
const FEEDBACK_MS: u32 = 3500;

/// Submission lifecycle of the form
///
/// The feedback message is derived from the status, so a stale
/// status/message pair cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

impl FormStatus {
    /// Feedback message shown for this status, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FormStatus::Saved => Some("Entry saved. Keep it up!"),
            FormStatus::Failed => Some("Could not save the entry. Try again."),
            FormStatus::Idle | FormStatus::Saving => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, FormStatus::Saving)
    }
}

/// Both fields if neither is blank after trimming, else `None`
///
/// A blank field makes the submit a silent no-op. Values are sent as
/// typed; only the blank check trims.
pub fn submission(title: &str, description: &str) -> Option<(String, String)> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return None;
    }
    Some((title.to_string(), description.to_string()))
}

/// Hard-cap input at `max` characters as typed
pub fn clamp_input(value: String, max: usize) -> String {
    if value.chars().count() > max {
        value.chars().take(max).collect()
    } else {
        value
    }
}

/// Form for recording what was learned today
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);
    // Each save bumps the epoch so a stale dismiss timer cannot touch
    // state that belongs to a newer save.
    let feedback_epoch = StoredValue::new(0u32);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some((title_value, description_value)) = submission(&title.get(), &description.get())
        else {
            return;
        };

        set_status.set(FormStatus::Saving);
        // Invalidate any dismiss timer still pending from the previous save
        feedback_epoch.update_value(|v| *v += 1);
        spawn_local(async move {
            let args = CreateEntryArgs {
                title: &title_value,
                description: &description_value,
            };
            match api::create_entry(&args).await {
                Ok(_) => {
                    set_status.set(FormStatus::Saved);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("save failed: {}", e).into());
                    set_status.set(FormStatus::Failed);
                }
            }

            let epoch = feedback_epoch.get_value();
            TimeoutFuture::new(FEEDBACK_MS).await;
            if feedback_epoch.get_value() == epoch {
                set_status.set(FormStatus::Idle);
            }
        });
    };

    view! {
        <div class="form-container">
            <div class="form-header">
                <h2 class="form-title">"What did you learn today?"</h2>
                <p class="form-subtitle">"Record your learning of the day"</p>
            </div>

            <form class="form-card" on:submit=save>
                <div class="field-group">
                    <label class="field-label" for="title">"Title"</label>
                    <input
                        id="title"
                        name="title"
                        type="text"
                        class="field-input"
                        placeholder="E.g. Hooks in React"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title.set(clamp_input(input.value(), TITLE_MAX));
                        }
                        maxlength=TITLE_MAX.to_string()
                        required=true
                    />
                    <span class="field-counter">
                        {move || format!("{}/{}", title.get().chars().count(), TITLE_MAX)}
                    </span>
                </div>

                <div class="field-group">
                    <label class="field-label" for="description">"Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        class="field-textarea"
                        placeholder="Describe what you learned in detail..."
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_description.set(clamp_input(input.value(), DESCRIPTION_MAX));
                        }
                        maxlength=DESCRIPTION_MAX.to_string()
                        rows=5
                        required=true
                    ></textarea>
                    <span class="field-counter">
                        {move || format!("{}/{}", description.get().chars().count(), DESCRIPTION_MAX)}
                    </span>
                </div>

                <button
                    type="submit"
                    class=move || {
                        if status.get().is_saving() { "submit-btn loading" } else { "submit-btn" }
                    }
                    disabled=move || status.get().is_saving()
                >
                    {move || if status.get().is_saving() { "Saving..." } else { "Save entry" }}
                </button>

                {move || {
                    status.get().message().map(|message| {
                        let toast_class = if status.get() == FormStatus::Saved {
                            "toast toast-success"
                        } else {
                            "toast toast-error"
                        };
                        view! { <div class=toast_class>{message}</div> }
                    })
                }}
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_is_noop_submission() {
        assert_eq!(submission("", "valid text"), None);
        assert_eq!(submission("   ", "valid text"), None);
    }

    #[test]
    fn test_blank_description_is_noop_submission() {
        assert_eq!(submission("Hooks", ""), None);
        assert_eq!(submission("Hooks", "\n\t "), None);
    }

    #[test]
    fn test_submission_sends_values_as_typed() {
        let (title, description) = submission(" Hooks ", "Learned about hooks").unwrap();
        assert_eq!(title, " Hooks ");
        assert_eq!(description, "Learned about hooks");
    }

    #[test]
    fn test_clamp_input_caps_at_limit() {
        let long: String = "x".repeat(40);
        assert_eq!(clamp_input(long, TITLE_MAX).chars().count(), TITLE_MAX);
    }

    #[test]
    fn test_clamp_input_leaves_short_values_alone() {
        assert_eq!(clamp_input("short".to_string(), TITLE_MAX), "short");
    }

    #[test]
    fn test_clamp_input_counts_characters_not_bytes() {
        let accented: String = "é".repeat(DESCRIPTION_MAX);
        assert_eq!(
            clamp_input(accented.clone(), DESCRIPTION_MAX),
            accented
        );
    }

    #[test]
    fn test_only_outcomes_carry_messages() {
        assert_eq!(FormStatus::Idle.message(), None);
        assert_eq!(FormStatus::Saving.message(), None);
        assert!(FormStatus::Saved.message().is_some());
        assert!(FormStatus::Failed.message().is_some());
    }

    #[test]
    fn test_form_starts_idle() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
        assert!(!FormStatus::default().is_saving());
    }
}
