//! Assistant catalog integration tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use serial_test::serial;
use tower::ServiceExt;

use crate::common::{create_test_jwt, TestApp};

async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
#[serial]
async fn test_catalog_lists_seven_assistants() {
    let app = TestApp::new().await.unwrap();
    let user = app.create_test_user().await.unwrap();
    let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/v1/assistants")
        .header("authorization", format!("Bearer {}", jwt))
        .body(Body::empty())
        .unwrap();

    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 7);

    let kinds: Vec<&str> = list.iter().map(|a| a["kind"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec![
            "ai_assistant",
            "sales_assistant",
            "hr_assistant",
            "marketing_assistant",
            "data_analyst",
            "bug_reporting",
            "rfp_response",
        ]
    );

    for assistant in list {
        assert!(!assistant["name"].as_str().unwrap().is_empty());
        assert!(!assistant["welcome_message"].as_str().unwrap().is_empty());
        assert_eq!(assistant["quick_options"].as_array().unwrap().len(), 4);
    }

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_catalog_requires_authentication() {
    let app = TestApp::new().await.unwrap();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/v1/assistants")
        .body(Body::empty())
        .unwrap();

    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    app.cleanup().await.unwrap();
}
