//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{AuthProvider, Footer, Header};
use crate::pages::{About, Companies, Home, Jobs, Onboarding, PostJob, SignUp};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <div class="app">
                    <Header />
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/jobs") view=Jobs />
                            <Route path=path!("/companies") view=Companies />
                            <Route path=path!("/about") view=About />
                            <Route path=path!("/post-job") view=PostJob />
                            <Route path=path!("/onboarding") view=Onboarding />
                            <Route path=path!("/sign-up") view=SignUp />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Router>
        </AuthProvider>
    }
}
