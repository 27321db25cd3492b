//! Auth collaborator context
//!
//! Process-wide, externally-owned session state with a lifecycle the
//! provider controls. Components read the current [`SessionView`] through
//! the context on every render; it is never cached across renders. The
//! shell itself only reacts to this projection.

use crate::api::{self, UserProfile};
use jobdeck_core::{SessionView, SiteConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Read-only handle on the auth collaborator's state
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<SessionView>,
    profile: RwSignal<Option<UserProfile>>,
    // Filled from the server's /api/site config once it resolves; until
    // then these hold the built-in defaults.
    origin: RwSignal<String>,
    sign_in_redirect: RwSignal<String>,
}

impl AuthContext {
    fn new() -> Self {
        let defaults = SiteConfig::default();
        Self {
            session: RwSignal::new(SessionView::Loading),
            profile: RwSignal::new(None),
            origin: RwSignal::new(defaults.auth_origin),
            sign_in_redirect: RwSignal::new(defaults.sign_in_redirect),
        }
    }

    /// Current session snapshot (reactive).
    pub fn session(&self) -> SessionView {
        self.session.get()
    }

    /// Display info for the signed-in user, if resolved.
    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.get()
    }

    /// Origin of the hosted auth provider (reactive).
    pub fn origin(&self) -> String {
        self.origin.get()
    }

    /// Where the auth widget sends the user after sign-in/sign-up
    /// completes (reactive).
    pub fn sign_in_redirect(&self) -> String {
        self.sign_in_redirect.get()
    }

    fn configure(&self, origin: String, sign_in_redirect: String) {
        self.origin.set(origin);
        self.sign_in_redirect.set(sign_in_redirect);
    }

    pub fn set_session(&self, view: SessionView, profile: Option<UserProfile>) {
        self.session.set(view);
        self.profile.set(profile);
    }

    /// End the session: notify the provider and project signed-out locally.
    pub fn sign_out(&self) {
        let origin = self.origin.get_untracked();
        spawn_local(async move {
            api::request_sign_out(&origin).await;
        });
        self.set_session(SessionView::SignedOut, None);
    }
}

/// Access the auth context; panics outside an [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Provides [`AuthContext`]. On mount it pulls the served site config,
/// then probes the collaborator's session at the configured origin.
/// Until the probe resolves, the session stays [`SessionView::Loading`]
/// and the header renders its neutral variant.
#[component]
pub fn AuthProvider(
    /// Override for the hosted auth provider origin
    #[prop(optional, into)]
    auth_origin: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = AuthContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        let origin_override = auth_origin.clone();
        spawn_local(async move {
            let site = api::fetch_site_config().await;
            ctx.configure(
                origin_override.unwrap_or(site.auth_origin),
                site.sign_in_redirect,
            );
            let (view, profile) = api::fetch_session(&ctx.origin.get_untracked()).await;
            ctx.set_session(view, profile);
        });
    });

    children()
}
