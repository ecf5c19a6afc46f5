mod common;

use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").send().await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");

    let response = app.get("/").send().await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "alice@example.com", "Str0ngPass!")
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());

    // Password material never crosses the boundary.
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "alice@example.com", "Str0ngPass!")
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.register("alice", "other@example.com", "X").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Username already exists"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "alice@example.com", "Str0ngPass!")
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.register("bob", "alice@example.com", "X").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Email already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "not-an-email", "Str0ngPass!").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_register_empty_fields() {
    let app = TestApp::spawn().await;

    let response = app.register("", "alice@example.com", "Str0ngPass!").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.register("alice", "", "Str0ngPass!").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.register("alice", "alice@example.com", "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "alice@example.com", "Str0ngPass!")
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.login("alice", "Str0ngPass!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(!body["data"]["access_token"]
        .as_str()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.register("alice", "alice@example.com", "Str0ngPass!")
        .await;

    let response = app.login("alice", "wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_same_status() {
    let app = TestApp::spawn().await;

    app.register("alice", "alice@example.com", "Str0ngPass!")
        .await;

    // Wrong password and unknown user are indistinguishable at the boundary.
    let wrong_password = app.login("alice", "wrong").await;
    let unknown_user = app.login("nobody", "Str0ngPass!").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_body: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_current_user_success() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("alice", "alice@example.com", "Str0ngPass!")
        .await;

    let response = app
        .get_authenticated("/auth/me", &token)
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_current_user_no_token() {
    let app = TestApp::spawn().await;

    let response = app.get("/auth/me").send().await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/auth/me", "garbage")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_expired_token() {
    // Tokens from this app are already expired at issuance.
    let app = TestApp::spawn_with_token_validity(-5).await;

    let token = app
        .register_and_login("alice", "alice@example.com", "Str0ngPass!")
        .await;

    let response = app
        .get_authenticated("/auth/me", &token)
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_email_lookup_is_case_insensitive() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "Alice@Example.com", "Str0ngPass!")
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "alice@example.com");

    // Same address in different case still collides.
    let response = app.register("bob", "ALICE@EXAMPLE.COM", "X").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
