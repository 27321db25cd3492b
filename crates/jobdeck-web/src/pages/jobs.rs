//! Job listings page

use leptos::prelude::*;

#[component]
pub fn Jobs() -> impl IntoView {
    view! {
        <div class="page jobs-page">
            <h2>"Browse Jobs"</h2>
            <div class="page-content">
                <p>"Job listings - Coming Soon"</p>
                <p class="hint">"This will display open roles with search and filters."</p>
            </div>
        </div>
    }
}
