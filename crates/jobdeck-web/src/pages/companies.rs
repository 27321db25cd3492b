//! Companies directory page

use leptos::prelude::*;

#[component]
pub fn Companies() -> impl IntoView {
    view! {
        <div class="page companies-page">
            <h2>"Companies"</h2>
            <div class="page-content">
                <p>"Company directory - Coming Soon"</p>
            </div>
        </div>
    }
}
