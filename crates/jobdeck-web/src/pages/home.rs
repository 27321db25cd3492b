//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page with the hero call-to-actions
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Find your next role, or your next hire"</h1>
                <p class="hero-subtitle">
                    "Browse thousands of openings or post a job in minutes."
                </p>
                <div class="hero-actions">
                    <A href="/jobs" attr:class="btn btn-primary">
                        "Browse Jobs"
                    </A>
                    <A href="/?sign-in=true" attr:class="btn btn-outline">
                        "Sign In"
                    </A>
                </div>
            </section>
        </div>
    }
}
