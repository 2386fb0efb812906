//! Authentication API integration tests
//!
//! Tests for signup, login and logout through the full router.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/signup",
            json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "secret1",
                "first_name": "Alice"
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["username"], "alice");
    assert_eq!(response.body["user"]["email"], "a@x.com");
    assert_eq!(response.body["user"]["first_name"], "Alice");
    assert_eq!(response.body["user"]["last_name"], "");
    assert!(response.body["user"].get("password_hash").is_none());
    assert_eq!(response.body["token"]["token_type"], "Bearer");
    assert_eq!(response.body["token"]["expires_in"], 864_000);

    let token = response.body["token"]["access_token"].as_str().unwrap();
    let claims = app.state.tokens.decode_claims(token).unwrap();
    assert_eq!(claims.exp - claims.iat, 864_000);
    assert_eq!(json!(claims.user_id), response.body["user"]["id"]);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/auth/signup", json!({ "username": "alice" }), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Username, email and password are required"
    );
    assert_eq!(response.body["status"], 400);
}

#[tokio::test]
async fn test_signup_accepts_null_names() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/signup",
            json!({
                "username": "alice",
                "email": "a@x.com",
                "password": "secret1",
                "first_name": null,
                "last_name": null
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["first_name"], "");
    assert_eq!(response.body["user"]["last_name"], "");
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let app = TestApp::new().await;

    let wrong_type = app
        .post(
            "/api/auth/signup",
            json!({ "username": 42, "email": "a@x.com", "password": "secret1" }),
            None,
        )
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.body["status"], 400);
    assert!(
        wrong_type.body["message"].as_str().unwrap().contains("username"),
        "{}",
        wrong_type.body
    );

    let login_wrong_type = app
        .post("/api/auth/login", json!({ "username": ["alice"] }), None)
        .await;
    assert_eq!(login_wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(login_wrong_type.body["status"], 400);
    assert!(login_wrong_type.body["message"].is_string());
}

#[tokio::test]
async fn test_signup_duplicate_username_then_email() {
    let app = TestApp::new().await;
    app.signup("alice").await;

    let same_username = app
        .post(
            "/api/auth/signup",
            json!({ "username": "alice", "email": "new@example.com", "password": "secret1" }),
            None,
        )
        .await;
    assert_eq!(same_username.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_username.body["message"], "Username already exists");

    let same_email = app
        .post(
            "/api/auth/signup",
            json!({ "username": "bob", "email": "alice@example.com", "password": "secret1" }),
            None,
        )
        .await;
    assert_eq!(same_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_email.body["message"], "Email already exists");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.signup("alice").await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "username": "alice", "password": "secret1" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "alice");

    let token = response.body["token"]["access_token"].as_str().unwrap();
    let events = app.get("/api/events", Some(token)).await;
    assert_eq!(events.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new().await;
    app.signup("alice").await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            json!({ "username": "alice", "password": "wrong" }),
            None,
        )
        .await;
    let unknown_user = app
        .post(
            "/api/auth/login",
            json!({ "username": "mallory", "password": "secret1" }),
            None,
        )
        .await;
    let missing_fields = app.post("/api/auth/login", json!({}), None).await;

    for response in [wrong_password, unknown_user, missing_fields] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid username or password");
    }
}

#[tokio::test]
async fn test_logout_needs_no_token() {
    let app = TestApp::new().await;

    let response = app.post("/api/auth/logout", json!({}), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Logged out successfully. Please delete the token on client side."
    );
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.get("/api/nowhere", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Not found", "status": 404 }));
}
