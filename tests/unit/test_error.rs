use reports_probe::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_rejected() {
    let error = AppError::Rejected {
        status: StatusCode::UNAUTHORIZED,
        body: "bad credentials".to_string(),
    };
    assert_eq!(error.to_string(), "request rejected: 401 Unauthorized");
}

#[test]
fn test_app_error_display_missing_token() {
    let error = AppError::MissingToken {
        body: r#"{"error":"no_token_here"}"#.to_string(),
    };
    assert_eq!(error.to_string(), "missing access token");
    assert_eq!(error.body(), Some(r#"{"error":"no_token_here"}"#));
}

#[test]
fn test_app_error_invalid_body_keeps_body_and_source() {
    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let error = AppError::InvalidBody {
        source,
        body: "<html>".to_string(),
    };
    assert!(error.to_string().starts_with("json error:"));
    assert_eq!(error.body(), Some("<html>"));
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_rejected_exposes_status_and_body() {
    let error = AppError::Rejected {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "internal error".to_string(),
    };
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(error.body(), Some("internal error"));
}

#[test]
fn test_app_error_without_response_has_no_body() {
    let error = AppError::MissingToken {
        body: String::new(),
    };
    assert_eq!(error.body(), None);
    assert_eq!(error.status(), None);
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(app_error.to_string().starts_with("json error:"));
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
    assert_eq!(app_error.to_string(), "io error: test");
}
