//! Web router using Axum
//!
//! Serves the SPA shell plus a couple of small JSON endpoints. All page
//! logic lives in the WASM frontend; there is no data backend here.

use axum::{response::Html, routing::get, Json, Router};
use jobdeck_core::SiteConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Create the web router
pub fn create_router(config: Arc<SiteConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/site", get(site_handler))
        .layer(cors)
        .with_state(config)
}

async fn index_handler(
    axum::extract::State(config): axum::extract::State<Arc<SiteConfig>>,
) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{brand}</title>
</head>
<body>
    <div class="setup-message">
        <h1>{brand} - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the site can be displayed.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/jobdeck-web &amp;&amp; trunk build --release</code></li>
            <li>Restart server: <code>jobdeck web</code></li>
        </ol>
        <p>API endpoints available now: <a href="/api/health">/api/health</a>, <a href="/api/site">/api/site</a></p>
    </div>
</body>
</html>"#,
        brand = config.brand,
    ))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Site config consumed by external tooling (brand, auth origin, redirect)
async fn site_handler(
    axum::extract::State(config): axum::extract::State<Arc<SiteConfig>>,
) -> Json<SiteConfig> {
    Json((*config).clone())
}
