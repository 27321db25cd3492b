//! Modal sign-in overlay hosting the auth collaborator's widget
//!
//! Dismissal paths: backdrop click (only when the click target is the
//! backdrop itself, so clicks bubbling out of the embedded widget never
//! dismiss it), the close button, and Escape. All of them invoke the same
//! `on_close`, which routes through the shell so the URL flag is cleared
//! in the same turn.

use crate::components::use_auth;
use crate::hooks::use_window_keydown;
use leptos::prelude::*;

/// True only when the click landed on the element the handler is bound to,
/// not on a descendant.
fn is_backdrop_click(event: &web_sys::MouseEvent) -> bool {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Sign-in overlay
#[component]
pub fn SignInOverlay(on_close: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    let auth = use_auth();
    // Reactive: picks up the served site config when it resolves after
    // the overlay is already mounted.
    let widget_src = move || {
        let redirect = auth.sign_in_redirect();
        format!(
            "{}/sign-in?redirect_url={}&sign_up_redirect_url={}",
            auth.origin(),
            redirect,
            redirect
        )
    };

    use_window_keydown(move |event| {
        if event.key() == "Escape" {
            on_close();
        }
    });

    view! {
        <div
            class="overlay-backdrop"
            on:click=move |event| {
                if is_backdrop_click(&event) {
                    on_close();
                }
            }
        >
            <div class="overlay-panel">
                <button class="overlay-close" on:click=move |_| on_close() aria-label="Close">
                    "✕"
                </button>
                <div class="overlay-widget">
                    // Hosted widget; its internal steps (and failures) are
                    // owned by the auth provider.
                    <iframe class="sign-in-widget" title="Sign in" src=widget_src></iframe>
                </div>
            </div>
        </div>
    }
}
