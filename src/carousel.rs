//! Carousel Navigation Logic
//!
//! Pure state helpers for the entry browser: display state, sorting,
//! index stepping, and swipe interpretation. Kept free of DOM types so
//! everything can be unit tested without a browser.

use crate::models::Entry;

/// Horizontal distance a swipe must exceed to count as navigation
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Delay before a navigation is applied, so the exit animation can play
pub const SLIDE_OUT_MS: u32 = 220;

/// Which way the visible card slides out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    pub fn class(&self) -> &'static str {
        match self {
            SlideDirection::Left => "slide-left",
            SlideDirection::Right => "slide-right",
        }
    }
}

/// A single-step navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Previous,
    Next,
}

/// What the browser is currently showing
///
/// `Ready` never holds an empty list; an empty fetch becomes `Empty`,
/// so the loading > error > empty > card display precedence is just a
/// match on this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseState {
    /// Fetch in flight
    Loading,
    /// Fetch failed; the user retries by reloading
    Failed(String),
    /// The store has no entries yet
    Empty,
    /// At least one entry, sorted newest first
    Ready(Vec<Entry>),
}

impl BrowseState {
    /// Build the display state from a settled fetch, newest entry first
    ///
    /// The sort is stable: entries sharing a timestamp keep their
    /// arrival order.
    pub fn from_fetch(result: Result<Vec<Entry>, String>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => BrowseState::Empty,
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                BrowseState::Ready(entries)
            }
            Err(message) => BrowseState::Failed(message),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            BrowseState::Ready(entries) => entries,
            _ => &[],
        }
    }
}

/// Target index and slide direction for a step, or `None` at the bounds
pub fn step(index: usize, len: usize, request: NavRequest) -> Option<(usize, SlideDirection)> {
    match request {
        NavRequest::Previous if index > 0 => Some((index - 1, SlideDirection::Right)),
        NavRequest::Next if index + 1 < len => Some((index + 1, SlideDirection::Left)),
        _ => None,
    }
}

/// Target index and slide direction for a direct jump
///
/// `None` if the target is the current card or out of range.
pub fn jump(index: usize, target: usize, len: usize) -> Option<(usize, SlideDirection)> {
    if target >= len || target == index {
        return None;
    }

    let direction = if target > index {
        SlideDirection::Left
    } else {
        SlideDirection::Right
    };
    Some((target, direction))
}

/// Interpret a completed horizontal gesture
///
/// `delta` is start X minus end X; the threshold is exclusive, so a
/// drag of exactly [`SWIPE_THRESHOLD`] units does nothing.
pub fn swipe(delta: f64) -> Option<NavRequest> {
    if delta.abs() <= SWIPE_THRESHOLD {
        return None;
    }

    Some(if delta > 0.0 {
        NavRequest::Next
    } else {
        NavRequest::Previous
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: i64, created_at: i64) -> Entry {
        Entry {
            id,
            title: format!("Entry {}", id),
            description: format!("Description {}", id),
            created_at,
        }
    }

    #[test]
    fn test_from_fetch_sorts_newest_first() {
        let state = BrowseState::from_fetch(Ok(vec![
            make_entry(1, 100), // T1
            make_entry(2, 200), // T2
            make_entry(3, 300), // T3
        ]));

        let entries = state.entries();
        // [T3, T2, T1]; index 0 points at T3
        assert_eq!(entries[0].created_at, 300);
        assert_eq!(entries[1].created_at, 200);
        assert_eq!(entries[2].created_at, 100);
    }

    #[test]
    fn test_from_fetch_ties_keep_arrival_order() {
        let state = BrowseState::from_fetch(Ok(vec![
            make_entry(1, 100),
            make_entry(2, 100),
            make_entry(3, 100),
        ]));

        let ids: Vec<i64> = state.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_fetch_empty_is_empty_state() {
        assert_eq!(BrowseState::from_fetch(Ok(Vec::new())), BrowseState::Empty);
    }

    #[test]
    fn test_from_fetch_error_is_failed_state() {
        let state = BrowseState::from_fetch(Err("boom".to_string()));
        assert_eq!(state, BrowseState::Failed("boom".to_string()));
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        assert_eq!(step(0, 3, NavRequest::Previous), None);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        assert_eq!(step(2, 3, NavRequest::Next), None);
    }

    #[test]
    fn test_step_directions() {
        // backward slides the card out to the right, forward to the left
        assert_eq!(step(1, 3, NavRequest::Previous), Some((0, SlideDirection::Right)));
        assert_eq!(step(1, 3, NavRequest::Next), Some((2, SlideDirection::Left)));
    }

    #[test]
    fn test_step_on_single_entry_is_noop() {
        assert_eq!(step(0, 1, NavRequest::Previous), None);
        assert_eq!(step(0, 1, NavRequest::Next), None);
    }

    #[test]
    fn test_jump_derives_direction_from_target() {
        assert_eq!(jump(0, 2, 5), Some((2, SlideDirection::Left)));
        assert_eq!(jump(4, 1, 5), Some((1, SlideDirection::Right)));
    }

    #[test]
    fn test_jump_to_current_or_out_of_range_is_noop() {
        assert_eq!(jump(2, 2, 5), None);
        assert_eq!(jump(2, 5, 5), None);
    }

    #[test]
    fn test_swipe_threshold_is_exclusive() {
        assert_eq!(swipe(51.0), Some(NavRequest::Next));
        assert_eq!(swipe(-51.0), Some(NavRequest::Previous));
        assert_eq!(swipe(50.0), None);
        assert_eq!(swipe(-50.0), None);
    }

    #[test]
    fn test_swipe_below_threshold_is_noop() {
        assert_eq!(swipe(0.0), None);
        assert_eq!(swipe(12.5), None);
        assert_eq!(swipe(-49.9), None);
    }
}
