//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-row">
                <span class="footer-brand">"jobdeck"</span>
                <div class="footer-links">
                    <A href="/jobs" attr:class="footer-link">
                        "Browse Jobs"
                    </A>
                    <A href="/companies" attr:class="footer-link">
                        "Companies"
                    </A>
                    <A href="/about" attr:class="footer-link">
                        "About"
                    </A>
                </div>
            </div>
        </footer>
    }
}
