//! About page

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h2>"About jobdeck"</h2>
            <div class="page-content">
                <p>"jobdeck connects candidates and recruiters without the noise."</p>
            </div>
        </div>
    }
}
