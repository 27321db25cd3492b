//! Navigation header: chrome, links, role-gated actions, menu, overlay
//!
//! All state lives in a single [`NavShell`] reducer; every DOM event is
//! translated into a [`NavEvent`] and dispatched. Overlay transitions
//! mutate the URL inside the same dispatch, so visibility and the
//! `sign-in` query flag can never diverge between renders.

use crate::components::{use_auth, SignInOverlay, UserButton};
use crate::hooks::use_window_scroll;
use jobdeck_core::{NavEvent, NavShell, NavVariant, NoQuery, QueryPairs};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Site header with brand mark, primary links, role-gated action area,
/// responsive menu, and the sign-in overlay mount.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = StoredValue::new_local(use_navigate());

    let shell = RwSignal::new(NavShell::new());
    let plan = Memo::new(move |_| shell.with(|s| s.render_plan()));

    // Single dispatch point: apply the event, then commit any URL change
    // the reducer made. Both happen inside one event turn. Scroll fires
    // continuously, so the query is only materialized for events that
    // can read or write it.
    let dispatch = move |event: NavEvent| {
        if !event.touches_url() {
            shell.update(|s| s.apply(event, &mut NoQuery));
            return;
        }
        let mut query = QueryPairs::parse(&search.get_untracked());
        let before = query.to_query_string();
        shell.update(|s| s.apply(event, &mut query));
        let after = query.to_query_string();
        if after != before {
            let target = format!("{}{}", pathname.get_untracked(), after);
            navigate.with_value(|go| {
                go(
                    &target,
                    NavigateOptions {
                        scroll: false,
                        ..Default::default()
                    },
                )
            });
        }
    };

    // Mount-time sync plus every later URL change (including history
    // traversal, which may add or drop the sign-in flag).
    Effect::new(move |_| {
        search.track();
        dispatch(NavEvent::UrlChanged);
    });

    // Route changes force the responsive menu closed.
    Effect::new(move |_| {
        pathname.track();
        dispatch(NavEvent::RouteChanged);
    });

    // Auth collaborator updates flow in read-only.
    Effect::new(move |_| {
        dispatch(NavEvent::SessionChanged(auth.session()));
    });

    use_window_scroll(move |offset| dispatch(NavEvent::Scrolled(offset)));

    view! {
        <header class="site-header" class:compact=move || plan.get().compact>
            <div class="container">
                <nav class="nav-row">
                    <div class="nav-left">
                        <A href="/" attr:class="brand" attr:aria-label="jobdeck home">
                            <span class="brand-mark">"jobdeck"</span>
                        </A>

                        <div class="nav-links">
                            <A href="/jobs" attr:class="nav-link">
                                "Browse Jobs"
                            </A>
                            <A href="/companies" attr:class="nav-link">
                                "Companies"
                            </A>
                            <A href="/about" attr:class="nav-link">
                                "About"
                            </A>
                        </div>
                    </div>

                    <div class="nav-actions">
                        {move || match plan.get().variant {
                            NavVariant::Neutral => ().into_any(),
                            NavVariant::SignedOut => {
                                view! {
                                    <button
                                        class="btn btn-outline sign-in"
                                        on:click=move |_| dispatch(NavEvent::OverlayOpenRequested)
                                    >
                                        "Sign In"
                                    </button>
                                    <A href="/sign-up" attr:class="btn btn-primary">
                                        "Get Started"
                                    </A>
                                }
                                    .into_any()
                            }
                            NavVariant::Recruiter => {
                                view! {
                                    <A href="/post-job" attr:class="btn btn-outline post-job">
                                        "Post a Job"
                                    </A>
                                    <UserButton />
                                }
                                    .into_any()
                            }
                            NavVariant::Member => view! { <UserButton /> }.into_any(),
                        }}

                        <button
                            class="burger"
                            on:click=move |_| dispatch(NavEvent::MenuToggled)
                            aria-label="Toggle menu"
                            aria-expanded=move || plan.get().menu_open.to_string()
                        >
                            {move || if plan.get().menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </nav>
            </div>

            // Responsive menu (small viewports); forced closed on scroll,
            // link selection, and route change.
            <div class="mobile-menu" class:menu-open=move || plan.get().menu_open>
                <A
                    href="/jobs"
                    attr:class="mobile-link"
                    on:click=move |_| dispatch(NavEvent::LinkSelected)
                >
                    "Browse Jobs"
                </A>
                <A
                    href="/companies"
                    attr:class="mobile-link"
                    on:click=move |_| dispatch(NavEvent::LinkSelected)
                >
                    "Companies"
                </A>
                <A
                    href="/about"
                    attr:class="mobile-link"
                    on:click=move |_| dispatch(NavEvent::LinkSelected)
                >
                    "About"
                </A>
                {move || {
                    match plan.get().variant {
                        NavVariant::Recruiter => {
                            view! {
                                <A
                                    href="/post-job"
                                    attr:class="mobile-link post-job"
                                    on:click=move |_| dispatch(NavEvent::LinkSelected)
                                >
                                    "Post a Job"
                                </A>
                            }
                                .into_any()
                        }
                        NavVariant::SignedOut => {
                            view! {
                                <button
                                    class="mobile-link sign-in"
                                    on:click=move |_| dispatch(NavEvent::OverlayOpenRequested)
                                >
                                    "Sign In / Register"
                                </button>
                            }
                                .into_any()
                        }
                        _ => ().into_any(),
                    }
                }}
            </div>
        </header>

        // Spacer for the fixed header
        <div class="header-spacer"></div>

        <Show when=move || plan.get().overlay_visible>
            <SignInOverlay on_close=move || dispatch(NavEvent::OverlayDismissed) />
        </Show>
    }
}
