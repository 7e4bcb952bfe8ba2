//! Input rejection at the HTTP boundary.
//!
//! Every request here fails before reaching the database, so the app runs
//! against a lazy pool that is never connected.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_offline_app, delete_auth, post_json, send_form, stored_files, token_for,
    Multipart,
};
use serde_json::json;

#[tokio::test]
async fn article_update_requires_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Renamed")
        .text("description", "Only two fields");

    let response = send_form(
        build_offline_app(dir.path()),
        "PUT",
        "/api/admin/articles/5",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"],
        json!(["category_id is required", "user_id is required"])
    );
}

#[tokio::test]
async fn non_numeric_id_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Home")
        .text("type", "landing")
        .text("description", "Welcome");

    let response = send_form(
        build_offline_app(dir.path()),
        "PUT",
        "/api/admin/pages/abc",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid ID");
}

#[tokio::test]
async fn fractional_id_is_invalid_on_delete() {
    let dir = tempfile::tempdir().unwrap();
    let response = delete_auth(
        build_offline_app(dir.path()),
        "/api/admin/faqs/1.5",
        &token_for(1),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid ID");
}

#[tokio::test]
async fn page_create_without_banner_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Home")
        .text("type", "landing")
        .text("description", "Welcome");

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/admin/pages",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Banner is required");
    assert!(stored_files(dir.path()).is_empty());
}

#[tokio::test]
async fn field_errors_come_before_upload_checks() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new().file("image", "team.png", b"png");

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/admin/portfolios",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"], json!(["title is required", "url is required"]));
    assert!(stored_files(dir.path()).is_empty());
}

#[tokio::test]
async fn non_integer_price_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Hosting")
        .text("description", "Basic plan")
        .text("price", "12.5")
        .text("type", "hosting");

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/admin/products",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid price format");
}

#[tokio::test]
async fn non_integer_discount_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("title", "Hosting")
        .text("description", "Basic plan")
        .text("price", "150000")
        .text("discount", "ten")
        .text("type", "hosting");

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/admin/products",
        Some(&token_for(1)),
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid discount format");
}

#[tokio::test]
async fn contact_create_lists_every_missing_field() {
    let dir = tempfile::tempdir().unwrap();
    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/admin/contacts",
        Some(&token_for(1)),
        Multipart::new().text("phone", "0811"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!([
            "address is required",
            "email is required",
            "office_operation is required",
        ])
    );
}

#[tokio::test]
async fn public_registration_checks_user_rules() {
    let dir = tempfile::tempdir().unwrap();
    let form = Multipart::new()
        .text("name", "A")
        .text("email", "not-an-email")
        .text("password", "123")
        .file("profile", "me.png", b"png");

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/create-user",
        None,
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!([
            "email must be a valid email address",
            "name must be at least 2 characters",
            "password must be at least 6 characters",
            "role is required",
        ])
    );
    assert!(stored_files(dir.path()).is_empty());
}

#[tokio::test]
async fn login_requires_both_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        build_offline_app(dir.path()),
        "/api/login",
        json!({ "email": "admin@codetech.test" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!(["password is required"])
    );
}

#[tokio::test]
async fn nested_json_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        build_offline_app(dir.path()),
        "/api/login",
        json!({ "email": ["a@b.com"], "password": "x" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn upload_over_the_body_limit_is_too_large() {
    let dir = tempfile::tempdir().unwrap();
    // test_config caps bodies at 1 MiB.
    let oversized = vec![0u8; 1024 * 1024 + 1];
    let form = Multipart::new()
        .text("name", "Big Upload")
        .text("email", "big@codetech.test")
        .text("password", "secret123")
        .text("role", "writer")
        .file("profile", "huge.png", &oversized);

    let response = send_form(
        build_offline_app(dir.path()),
        "POST",
        "/api/create-user",
        None,
        form,
    )
    .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["code"], "PAYLOAD_TOO_LARGE");
    assert!(stored_files(dir.path()).is_empty());
}
