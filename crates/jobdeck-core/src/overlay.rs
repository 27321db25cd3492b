//! Sign-in overlay visibility, kept in lockstep with the URL
//!
//! The URL is the only persisted state in the shell: presence of the
//! `sign-in` query flag (any non-empty value) means the overlay is visible,
//! absence means hidden. Every open/close path performs the state change
//! and the URL mutation in the same call, so the two never diverge, and a
//! direct link like `/?sign-in=true` opens the overlay on mount.

use crate::query::QueryState;

/// Query flag whose presence opens the sign-in overlay
pub const SIGN_IN_FLAG: &str = "sign-in";

/// True when the sign-in flag is present with a non-empty value
pub fn flag_present(query: &impl QueryState) -> bool {
    query.get(SIGN_IN_FLAG).is_some_and(|value| !value.is_empty())
}

/// Sign-in overlay visibility, bound to the URL flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
}

impl OverlayState {
    /// Open the overlay: write the URL flag and show, atomically.
    pub fn open(&mut self, query: &mut impl QueryState) {
        query.insert(SIGN_IN_FLAG, "true");
        self.visible = true;
        tracing::debug!("sign-in overlay opened");
    }

    /// Close the overlay: remove the flag entirely (absence is the
    /// canonical "closed" encoding) and hide, atomically.
    pub fn close(&mut self, query: &mut impl QueryState) {
        query.remove(SIGN_IN_FLAG);
        self.visible = false;
        tracing::debug!("sign-in overlay closed");
    }

    /// Derive visibility from the URL without rewriting it (idempotent
    /// read; runs on mount and on every URL change).
    pub fn sync_from_url(&mut self, query: &impl QueryState) {
        self.visible = flag_present(query);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}
