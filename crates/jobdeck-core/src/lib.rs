//! jobdeck-core - Core library for jobdeck
//!
//! Provides the headless navigation-shell controller (chrome, menu, overlay,
//! session gate) and the site configuration layer. No UI framework
//! dependency; compiles for native and wasm targets alike.

pub mod chrome;
pub mod config;
pub mod error;
pub mod menu;
pub mod overlay;
pub mod query;
pub mod session;
pub mod shell;

pub use chrome::{ChromeState, ScrollSource, ScrollSubscription, COMPACT_THRESHOLD_PX};
pub use config::SiteConfig;
pub use error::CoreError;
pub use menu::MenuState;
pub use overlay::{OverlayState, SIGN_IN_FLAG};
pub use query::{NoQuery, QueryPairs, QueryState};
pub use session::{NavVariant, Role, SessionView};
pub use shell::{NavEvent, NavShell, RenderPlan};
