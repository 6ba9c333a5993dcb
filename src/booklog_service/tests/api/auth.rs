use booklog_axum::routes::LoginResponse;
use fake::{Fake, faker::internet::en::SafeEmail};
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp, error_message};

#[tokio::test]
async fn register_returns_200_for_valid_input() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();

    let response = app
        .post_register(&json!({
            "email": email,
            "password": PASSWORD,
            "nickname": "reader",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn register_rejects_duplicate_email_in_any_case() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();
    let body = json!({ "email": email, "password": PASSWORD, "nickname": "first" });
    assert_eq!(app.post_register(&body).await.status().as_u16(), 200);

    let response = app
        .post_register(&json!({
            "email": email.to_uppercase(),
            "password": "another password",
            "nickname": "second",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Email is already registered");
}

#[tokio::test]
async fn register_returns_400_for_invalid_input() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();

    let test_cases = [
        (
            json!({ "email": "not-an-email", "password": PASSWORD, "nickname": "n" }),
            "invalid email",
        ),
        (
            json!({ "email": email, "password": "   ", "nickname": "n" }),
            "blank password",
        ),
        (
            json!({ "email": email, "password": PASSWORD, "nickname": "" }),
            "blank nickname",
        ),
        (
            json!({ "email": email, "password": PASSWORD, "nickname": "x".repeat(51) }),
            "nickname too long",
        ),
    ];

    for (body, case) in test_cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "case: {case}");
    }
}

#[tokio::test]
async fn register_rejects_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&json!({ "email": "missing@fields.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_returns_bearer_token_and_summary() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();
    app.post_register(&json!({ "email": email, "password": PASSWORD, "nickname": "Reader" }))
        .await;

    let response = app
        .post_login(&json!({ "email": email.to_uppercase(), "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let login: LoginResponse = response.json().await.unwrap();
    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.email, email.to_lowercase());
    assert_eq!(login.nickname, "Reader");
    assert!(!login.token.is_empty());
    assert!(login.expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();
    app.post_register(&json!({ "email": email, "password": PASSWORD, "nickname": "n" }))
        .await;

    let wrong_password = app
        .post_login(&json!({ "email": email, "password": "wrong password" }))
        .await;
    let unknown_email = app
        .post_login(&json!({ "email": "nobody@example.com", "password": PASSWORD }))
        .await;
    let garbage_email = app
        .post_login(&json!({ "email": "garbage", "password": PASSWORD }))
        .await;

    let mut messages = Vec::new();
    for response in [wrong_password, unknown_email, garbage_email] {
        assert_eq!(response.status().as_u16(), 400);
        messages.push(error_message(response).await);
    }
    assert!(messages.iter().all(|m| m == "Invalid email or password"));
}
