//! Navigation shell: one reducer reconciling every input signal
//!
//! Scroll position, the responsive menu, the URL-bound overlay, and the
//! auth session all feed a single [`NavShell`]. Events run to completion
//! on the UI event loop before the next one is processed, so there is no
//! overlapping mutation and no locking. The reconciled output is a
//! [`RenderPlan`] the view layer consumes declaratively.

use crate::chrome::ChromeState;
use crate::menu::MenuState;
use crate::overlay::OverlayState;
use crate::query::QueryState;
use crate::session::{NavVariant, SessionView};

/// Discrete inputs driving the shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// Viewport scrolled to the given offset (px)
    Scrolled(f64),
    /// Burger button clicked
    MenuToggled,
    /// A navigation link was selected
    LinkSelected,
    /// The route (pathname) changed
    RouteChanged,
    /// User asked to open the sign-in overlay
    OverlayOpenRequested,
    /// Overlay dismissed (backdrop, close button, or Escape)
    OverlayDismissed,
    /// The URL query changed (mount, navigation, history traversal)
    UrlChanged,
    /// The auth collaborator published a new session snapshot
    SessionChanged(SessionView),
}

impl NavEvent {
    /// Whether applying this event may read or write the URL query.
    ///
    /// Scroll is the only high-frequency source and must stay a boolean
    /// recomputation per event; callers use this to skip materializing
    /// the query entirely on the hot path.
    pub fn touches_url(&self) -> bool {
        match self {
            NavEvent::Scrolled(_)
            | NavEvent::MenuToggled
            | NavEvent::LinkSelected
            | NavEvent::RouteChanged => false,
            NavEvent::OverlayOpenRequested
            | NavEvent::OverlayDismissed
            | NavEvent::UrlChanged
            | NavEvent::SessionChanged(_) => true,
        }
    }
}

/// Reconciled rendering decision for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPlan {
    pub compact: bool,
    pub menu_open: bool,
    pub overlay_visible: bool,
    pub variant: NavVariant,
}

/// State machine behind the navigation header
#[derive(Debug, Default)]
pub struct NavShell {
    chrome: ChromeState,
    menu: MenuState,
    overlay: OverlayState,
    session: SessionView,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. `query` is the routing collaborator's current
    /// query state; overlay transitions mutate it in the same call that
    /// flips visibility, keeping URL and state in lockstep.
    pub fn apply(&mut self, event: NavEvent, query: &mut impl QueryState) {
        match event {
            NavEvent::Scrolled(offset) => {
                self.chrome.update(offset);
                // Closing the menu on scroll is a UX guarantee
                self.menu.close();
            }
            NavEvent::MenuToggled => self.menu.toggle(),
            NavEvent::LinkSelected | NavEvent::RouteChanged => self.menu.close(),
            NavEvent::OverlayOpenRequested => {
                self.overlay.open(query);
                self.menu.close();
            }
            NavEvent::OverlayDismissed => self.overlay.close(query),
            NavEvent::UrlChanged => self.overlay.sync_from_url(query),
            NavEvent::SessionChanged(view) => {
                let sign_in_completed =
                    view.signed_in() && !self.session.signed_in() && self.overlay.visible();
                self.session = view;
                if sign_in_completed {
                    // Collaborator finished signing the user in; the
                    // overlay's job is done.
                    self.overlay.close(query);
                }
            }
        }
    }

    /// Current reconciled rendering decision.
    pub fn render_plan(&self) -> RenderPlan {
        RenderPlan {
            compact: self.chrome.compact(),
            menu_open: self.menu.is_open(),
            overlay_visible: self.overlay.visible(),
            variant: NavVariant::for_session(&self.session),
        }
    }

    pub fn session(&self) -> SessionView {
        self.session
    }
}
