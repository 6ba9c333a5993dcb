use crate::helpers::{INDEX_HTML, TestApp};

#[tokio::test]
async fn health_check_is_public() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn unknown_non_api_paths_fall_back_to_index() {
    let app = TestApp::spawn().await;

    for path in ["/", "/books/42", "/some/client/route"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "path: {path}");
        assert_eq!(response.text().await.unwrap(), INDEX_HTML);
    }
}

#[tokio::test]
async fn missing_images_are_404_without_a_token() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/images/does-not-exist.png").await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn protected_api_paths_require_a_token() {
    let app = TestApp::spawn().await;

    for path in ["/api/books", "/api/books/1", "/api/unknown"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 401, "path: {path}");
    }
}

#[tokio::test]
async fn invalid_tokens_are_rejected() {
    let app = TestApp::spawn().await;

    let test_cases = [
        ("Bearer not.a.jwt", "malformed"),
        ("Basic dXNlcjpwYXNz", "wrong scheme"),
        ("Bearer ", "empty credential"),
    ];

    for (header, case) in test_cases {
        let response = app
            .http_client
            .get(app.url("/api/books"))
            .header("Authorization", header)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 401, "case: {case}");
    }
}

#[tokio::test]
async fn preflight_requests_pass_the_gate() {
    let app = TestApp::spawn().await;

    let response = app
        .http_client
        .request(reqwest::Method::OPTIONS, app.url("/api/books"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_ne!(response.status().as_u16(), 401);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
