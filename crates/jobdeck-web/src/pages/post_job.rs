//! Post a Job page (recruiter entry point)
//!
//! The header only shows the link to recruiters, but the role attribute is
//! client-supplied metadata; any server backing this form must enforce the
//! role again on its side.

use crate::components::use_auth;
use leptos::prelude::*;

#[component]
pub fn PostJob() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="page post-job-page">
            <h2>"Post a Job"</h2>
            <div class="page-content">
                <Show
                    when=move || auth.session().is_recruiter()
                    fallback=|| {
                        view! { <p class="hint">"Posting a job requires a recruiter account."</p> }
                    }
                >
                    <p>"Job posting form - Coming Soon"</p>
                </Show>
            </div>
        </div>
    }
}
