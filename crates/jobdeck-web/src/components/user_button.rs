//! Signed-in user button (avatar + menu)

use crate::components::use_auth;
use leptos::prelude::*;

/// Avatar button with a small dropdown for the signed-in state
#[component]
pub fn UserButton() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    let initial = move || {
        auth.profile()
            .map(|profile| profile.name.chars().next().unwrap_or('?').to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    let avatar_url = move || auth.profile().and_then(|profile| profile.avatar_url);

    view! {
        <div class="user-button">
            <button
                class="avatar"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                aria-label="Account menu"
                aria-expanded=move || menu_open.get().to_string()
            >
                {move || match avatar_url() {
                    Some(url) => view! { <img class="avatar-img" src=url alt="Avatar" /> }.into_any(),
                    None => view! { <span class="avatar-initial">{initial()}</span> }.into_any(),
                }}
            </button>

            <Show when=move || menu_open.get()>
                <div class="user-menu">
                    <span class="user-name">
                        {move || auth.profile().map(|profile| profile.name).unwrap_or_default()}
                    </span>
                    <button
                        class="user-menu-item"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            auth.sign_out();
                        }
                    >
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
