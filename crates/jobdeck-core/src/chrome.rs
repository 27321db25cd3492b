//! Header chrome derived from the viewport scroll position
//!
//! The header switches between transparent and compact (blurred, bordered)
//! chrome once the page is scrolled past a small threshold. The scroll
//! listener is the only high-frequency event source in the shell, so the
//! per-event work is a single boolean comparison.

/// Scroll offset (px) beyond which the header renders compact chrome
pub const COMPACT_THRESHOLD_PX: f64 = 10.0;

/// True when `offset` puts the header into compact chrome
pub fn is_compact(offset: f64) -> bool {
    offset > COMPACT_THRESHOLD_PX
}

/// Header's visual mode, derived on every scroll event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeState {
    compact: bool,
}

impl ChromeState {
    /// Recompute from the current scroll offset
    pub fn update(&mut self, offset: f64) {
        self.compact = is_compact(offset);
    }

    pub fn compact(&self) -> bool {
        self.compact
    }
}

/// Source of viewport scroll events, abstracted from any UI framework.
///
/// The shell subscribes for its lifetime and relies on the returned
/// [`ScrollSubscription`] to detach the listener on teardown. The shell
/// unmounts and remounts across route transitions, so a leaked listener
/// means double-subscription and updates after teardown.
pub trait ScrollSource {
    /// Subscribe `on_scroll` to scroll-offset updates.
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64) + Send + Sync>) -> ScrollSubscription;
}

/// Guard for an active scroll subscription; detaches the listener on drop.
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_compact_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(10.0)); // boundary is exclusive
        assert!(is_compact(10.1));
        assert!(is_compact(500.0));
        assert!(!is_compact(-3.0));
    }

    #[test]
    fn test_chrome_state_tracks_offset() {
        let mut chrome = ChromeState::default();
        assert!(!chrome.compact());

        chrome.update(50.0);
        assert!(chrome.compact());

        chrome.update(0.0);
        assert!(!chrome.compact());
    }

    /// In-memory scroll source used to verify the subscribe/detach contract.
    struct FakeScrollSource {
        listeners: Arc<Mutex<Vec<Box<dyn Fn(f64) + Send + Sync>>>>,
        detached: Arc<AtomicUsize>,
    }

    impl FakeScrollSource {
        fn new() -> Self {
            Self {
                listeners: Arc::new(Mutex::new(Vec::new())),
                detached: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn emit(&self, offset: f64) {
            for listener in self.listeners.lock().unwrap().iter() {
                listener(offset);
            }
        }
    }

    impl ScrollSource for FakeScrollSource {
        fn subscribe(&self, on_scroll: Box<dyn Fn(f64) + Send + Sync>) -> ScrollSubscription {
            self.listeners.lock().unwrap().push(on_scroll);
            let listeners = Arc::clone(&self.listeners);
            let detached = Arc::clone(&self.detached);
            ScrollSubscription::new(move || {
                listeners.lock().unwrap().clear();
                detached.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    #[test]
    fn test_subscription_detaches_on_drop() {
        let source = FakeScrollSource::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let sub = source.subscribe(Box::new(move |offset| {
            sink.lock().unwrap().push(offset);
        }));

        source.emit(25.0);
        assert_eq!(*seen.lock().unwrap(), vec![25.0]);

        drop(sub);
        assert_eq!(source.detached.load(Ordering::SeqCst), 1);

        // No updates after teardown
        source.emit(99.0);
        assert_eq!(*seen.lock().unwrap(), vec![25.0]);
    }
}
