//! Root-level routes and the shared middleware stack: the connectivity
//! message, read-only `/uploads`, request ids, and CORS.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use codetech_core::assets::AssetStore;
use common::{body_bytes, body_json, build_offline_app, get, send};

#[tokio::test]
async fn root_reports_connectivity() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_offline_app(dir.path()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "API CONNECTED SUCCESSFULLY"
    );
}

#[tokio::test]
async fn stored_asset_is_served_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    let reference = store.save(b"\x89PNG-bytes", "banner.png").await.unwrap();

    let response = get(build_offline_app(dir.path()), &reference).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"\x89PNG-bytes");
}

#[tokio::test]
async fn released_asset_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    let reference = store.save(b"old", "icon.svg").await.unwrap();
    store.release(&reference).await;

    let response = get(build_offline_app(dir.path()), &reference).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_offline_app(dir.path()), "/").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_offline_app(dir.path()), "/api/nothing-here").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/pages")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_from_configured_origin_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let response = send(
        build_offline_app(dir.path()),
        preflight("http://localhost:5173"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn preflight_from_unknown_origin_gets_no_grant() {
    let dir = tempfile::tempdir().unwrap();
    let response = send(
        build_offline_app(dir.path()),
        preflight("https://evil.example"),
    )
    .await;

    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}
