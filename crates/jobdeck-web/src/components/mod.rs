//! Leptos UI components

mod auth;
mod footer;
mod header;
mod sign_in_overlay;
mod user_button;

pub use auth::{use_auth, AuthContext, AuthProvider};
pub use footer::Footer;
pub use header::Header;
pub use sign_in_overlay::SignInOverlay;
pub use user_button::UserButton;
