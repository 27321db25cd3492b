//! Sign-up page

use leptos::prelude::*;

#[component]
pub fn SignUp() -> impl IntoView {
    view! {
        <div class="page sign-up-page">
            <h2>"Create an account"</h2>
            <div class="page-content">
                <p>"Registration is handled by the hosted sign-up flow."</p>
            </div>
        </div>
    }
}
