//! The bearer-token gate in front of `/api/admin`.
//!
//! None of these requests get past the gate, so no database is needed.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_offline_app, get, get_auth, send_form, Multipart, TEST_JWT_SECRET};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

/// A token for user 1 whose `exp` is `exp_offset` seconds from now.
fn token_expiring_in(exp_offset: i64, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": 1,
        "iat": now - 3600,
        "exp": now + exp_offset,
        "jti": uuid::Uuid::new_v4().to_string(),
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn assert_unauthorized(response: axum::http::Response<axum::body::Body>) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn missing_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_offline_app(dir.path()), "/api/admin/pages").await;
    assert_unauthorized(response).await;
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let token = token_expiring_in(-300, TEST_JWT_SECRET);

    let response = get_auth(build_offline_app(dir.path()), "/api/admin/users/me", &token).await;
    assert_unauthorized(response).await;
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let token = token_expiring_in(3600, "someone-elses-secret");

    let response = get_auth(build_offline_app(dir.path()), "/api/admin/contacts", &token).await;
    assert_unauthorized(response).await;
}

#[tokio::test]
async fn tampered_payload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let token = common::token_for(1);

    // Swap the payload segment for one claiming a different subject.
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = token_for_subject_payload(99);
    parts[1] = &forged;
    let tampered = parts.join(".");

    let response = get_auth(build_offline_app(dir.path()), "/api/admin/users", &tampered).await;
    assert_unauthorized(response).await;
}

fn token_for_subject_payload(sub: i64) -> String {
    let other = common::token_for(sub);
    other.split('.').nth(1).unwrap().to_string()
}

#[tokio::test]
async fn malformed_header_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = common::send(
        build_offline_app(dir.path()),
        axum::http::Request::builder()
            .uri("/api/admin/faqs")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await;
    assert_unauthorized(response).await;
}

#[tokio::test]
async fn writes_are_gated_before_any_upload_is_stored() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Home")
        .text("type", "landing")
        .text("description", "Welcome")
        .file("banner", "banner.png", b"png");

    let response = send_form(build_offline_app(dir.path()), "POST", "/api/admin/pages", None, form).await;

    assert_unauthorized(response).await;
    assert!(common::stored_files(dir.path()).is_empty());
}

#[tokio::test]
async fn unknown_admin_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_offline_app(dir.path()), "/api/admin/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
