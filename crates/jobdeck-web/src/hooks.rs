//! Window-level event subscriptions with teardown tied to the owner
//!
//! The navigation shell mounts and unmounts across route transitions, so
//! every listener registered here is removed on cleanup; a leaked scroll
//! listener silently degrades performance through double-subscription.

use jobdeck_core::{ScrollSource, ScrollSubscription};
use leptos::ev;
use leptos::prelude::*;

/// Browser implementation of the shell's scroll seam.
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64) + Send + Sync>) -> ScrollSubscription {
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or(0.0);
            on_scroll(offset);
        });
        ScrollSubscription::new(move || handle.remove())
    }
}

/// Subscribe to window scroll for the lifetime of the current owner.
///
/// The callback receives the current scroll offset in px; only a boolean
/// recomputation happens downstream, keeping the per-event cost flat.
pub fn use_window_scroll(on_scroll: impl Fn(f64) + Send + Sync + 'static) {
    let subscription = WindowScrollSource.subscribe(Box::new(on_scroll));
    on_cleanup(move || drop(subscription));
}

/// Subscribe to window keydown for the lifetime of the current owner.
pub fn use_window_keydown(on_key: impl Fn(web_sys::KeyboardEvent) + Send + Sync + 'static) {
    let handle = window_event_listener(ev::keydown, on_key);
    on_cleanup(move || handle.remove());
}
