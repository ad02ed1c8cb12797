//! Authentication API integration tests.
//!
//! End-to-end tests for registration, login, and the current-user endpoint,
//! driven over HTTP against an in-memory database.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;

use common::auth_helpers::{auth_header, create_test_user};
use common::test_server;

#[tokio::test]
async fn test_create_user_success() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/user")
        .json(&serde_json::json!({
            "name": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("id").is_some());

    // No password material in the response
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let (server, pool) = test_server().await;
    create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    let response = server
        .post("/user")
        .json(&serde_json::json!({
            "name": "other alice",
            "email": "alice@example.com",
            "password": "password456"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/user")
        .json(&serde_json::json!({
            "name": "alice",
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_short_password() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/user")
        .json(&serde_json::json!({
            "name": "alice",
            "email": "alice@example.com",
            "password": "short"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (server, pool) = test_server().await;
    let alice = create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    let response = server.get(&format!("/user/{}", alice.user.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let (server, _pool) = test_server().await;

    let response = server
        .get(&format!("/user/{}", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_success() {
    let (server, pool) = test_server().await;
    let alice = create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": alice.password
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["token_type"], "bearer");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (server, pool) = test_server().await;
    create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    let wrong_password = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "wrong-password"
        }))
        .await;

    let unknown_email = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    // Same body for both failure modes: no account enumeration
    let body1: serde_json::Value = wrong_password.json();
    let body2: serde_json::Value = unknown_email.json();
    assert_eq!(body1, body2);
}

#[tokio::test]
async fn test_login_token_works_for_me_endpoint() {
    let (server, pool) = test_server().await;
    let alice = create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    let login = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": alice.password
        }))
        .await;
    let token = login.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .get("/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&auth_header(&token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["name"], "alice");
}

#[tokio::test]
async fn test_me_without_token_is_401() {
    let (server, _pool) = test_server().await;

    let response = server.get("/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        &HeaderValue::from_static("Bearer")
    );
}

#[tokio::test]
async fn test_me_with_garbage_token_is_401() {
    let (server, _pool) = test_server().await;

    let response = server
        .get("/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not.a.token"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_wrong_scheme_is_401() {
    let (server, pool) = test_server().await;
    let alice = create_test_user(&pool, "alice", "alice@example.com", "password123").await;

    // Token is valid but the header is not "Bearer <token>"
    let response = server
        .get("/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {}", alice.token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
