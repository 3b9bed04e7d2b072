use crate::common;
use mockito::{Matcher, Server};
use reports_probe::prelude::*;
use serde_json::json;
use tokio_test::block_on;

#[tokio::test]
async fn test_login_returns_access_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .match_body(Matcher::Json(json!({
            "email": "admin@example.com",
            "password": "admin123",
            "grant_type": "password"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"abc123"}"#)
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );
    let token = auth.login().await.expect("login should succeed");

    assert_eq!(token.as_str(), "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_unauthorized_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(401)
        .with_body("invalid credentials")
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "wrong"),
    );

    match auth.login().await {
        Err(AppError::Rejected { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid credentials");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_without_token_field_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"access_token":""}"#)
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );

    assert!(matches!(
        auth.login().await,
        Err(AppError::MissingToken { .. })
    ));
}

#[tokio::test]
async fn test_authenticate_prints_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"access_token":"abc123","token_type":"bearer"}"#)
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );
    let mut out = Vec::new();
    let token = auth.authenticate(&mut out).await.unwrap();

    assert_eq!(token.map(|t| t.as_str().to_string()), Some("abc123".to_string()));
    let text = common::output(out);
    assert!(text.starts_with(&format!("Logging in to {}/api/auth/token...\n", server.url())));
    assert!(text.contains("Login successful."));
}

#[tokio::test]
async fn test_authenticate_prints_failure_and_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(401)
        .with_body(r#"{"error":{"message":"invalid_credentials"}}"#)
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "wrong"),
    );
    let mut out = Vec::new();
    let token = auth.authenticate(&mut out).await.unwrap();

    assert!(token.is_none());
    let text = common::output(out);
    assert!(text.contains("Login failed: request rejected: 401 Unauthorized"));
    assert!(text.contains(r#"{"error":{"message":"invalid_credentials"}}"#));
}

#[tokio::test]
async fn test_authenticate_prints_body_that_is_not_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );
    let mut out = Vec::new();
    let token = auth.authenticate(&mut out).await.unwrap();

    assert!(token.is_none());
    let text = common::output(out);
    assert!(text.contains("Login failed: json error:"));
    assert!(text.contains("<html>maintenance</html>\n"));
}

#[tokio::test]
async fn test_authenticate_prints_body_without_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"error":"no_token_here"}"#)
        .create_async()
        .await;

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );
    let mut out = Vec::new();
    let token = auth.authenticate(&mut out).await.unwrap();

    assert!(token.is_none());
    let text = common::output(out);
    assert!(text.contains("Login failed: missing access token"));
    assert!(text.contains(r#"{"error":"no_token_here"}"#));
}

#[tokio::test]
async fn test_authenticate_unreachable_server() {
    let client = HttpClient::new(&RestApiConfig::new(common::unreachable_url("/api"))).unwrap();
    let auth = Auth::new(client, Credentials::new("admin@example.com", "admin123"));

    let mut out = Vec::new();
    let token = auth.authenticate(&mut out).await.unwrap();

    assert!(token.is_none());
    assert!(common::output(out).contains("Login failed: network error"));
}

#[test]
fn test_login_blocking() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", common::api_path(TOKEN_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"access_token":"blocking-token"}"#)
        .create();

    let auth = Auth::new(
        common::create_test_client(&server.url()),
        Credentials::new("admin@example.com", "admin123"),
    );
    let token = block_on(auth.login()).expect("login should succeed");

    assert_eq!(token.as_str(), "blocking-token");
    mock.assert();
}
