//! Integration tests for the Axum router

#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use jobdeck_core::SiteConfig;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let router = jobdeck_web::create_router(Arc::new(SiteConfig::default()));

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_site_endpoint_returns_config() {
    let mut config = SiteConfig::default();
    config.brand = "acme-jobs".to_string();
    let router = jobdeck_web::create_router(Arc::new(config));

    let request = Request::builder()
        .uri("/api/site")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let returned: SiteConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(returned.brand, "acme-jobs");
}

#[tokio::test]
async fn test_site_endpoint_drives_client_auth_fields() {
    // The client reads authOrigin and signInRedirect from this endpoint
    // on mount; edits to config.json must show up here.
    let mut config = SiteConfig::default();
    config.auth_origin = "https://auth.example".to_string();
    config.sign_in_redirect = "/welcome".to_string();
    let router = jobdeck_web::create_router(Arc::new(config));

    let request = Request::builder()
        .uri("/api/site")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["authOrigin"], "https://auth.example");
    assert_eq!(json["signInRedirect"], "/welcome");
}

#[tokio::test]
async fn test_index_serves_html_shell() {
    let router = jobdeck_web::create_router(Arc::new(SiteConfig::default()));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("jobdeck"));
}
