//! Post-sign-in onboarding page
//!
//! The auth widget redirects here after a completed sign-in or sign-up.

use leptos::prelude::*;

#[component]
pub fn Onboarding() -> impl IntoView {
    view! {
        <div class="page onboarding-page">
            <h2>"Welcome aboard"</h2>
            <div class="page-content">
                <p>"Tell us whether you are here to hire or to be hired."</p>
            </div>
        </div>
    }
}
