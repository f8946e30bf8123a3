//! UI Components
//!
//! Reusable Leptos components.

mod entry_carousel;
mod entry_form;

pub use entry_carousel::EntryCarousel;
pub use entry_form::EntryForm;
