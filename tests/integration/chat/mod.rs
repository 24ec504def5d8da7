//! Chat handler integration tests
//!
//! Exercises the conversation reader (welcome seeding) and the message
//! appender (completion call + soft provider failure) end to end.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{create_test_jwt, TestApp};

const WELCOME_PREFIX: &str = "Hello! I'm your";
const PROVIDER_FAILURE_TEXT: &str = "Failed to generate AI response. Please try again.";

/// Helper: build an authenticated request
fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", jwt));

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper: total number of chat rows stored for a conversation
async fn count_rows(app: &TestApp, conversation_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM chat_messages WHERE conversation_id = $1",
    )
    .bind(conversation_id)
    .fetch_one(&app.pool)
    .await
    .unwrap()
}

mod test_get_conversation {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_first_read_seeds_welcome_for_requested_kind_only() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = Uuid::new_v4();
        let uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=hr_assistant",
            ws.slug, conv
        );
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &uri, &jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["conversation_id"], conv.to_string());

        let threads = &body["threads"];
        let hr = threads["hr_assistant"].as_array().unwrap();
        assert_eq!(hr.len(), 1);
        assert_eq!(hr[0]["role"], "assistant");
        assert_eq!(hr[0]["sequence"], 1);
        assert!(hr[0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Hello! I'm your Internal HR Assistant"));

        // All other six threads exist and are empty
        for other in [
            "ai_assistant",
            "sales_assistant",
            "marketing_assistant",
            "data_analyst",
            "bug_reporting",
            "rfp_response",
        ] {
            assert_eq!(threads[other].as_array().unwrap().len(), 0, "{}", other);
        }

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_default_kind_is_ai_assistant() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let uri = format!("/v1/workspaces/{}/chat", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &uri, &jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        let ai = body["threads"]["ai_assistant"].as_array().unwrap();
        assert_eq!(ai.len(), 1);
        assert!(ai[0]["content"].as_str().unwrap().starts_with(WELCOME_PREFIX));

        // A fresh conversation id was generated
        assert!(Uuid::parse_str(body["conversation_id"].as_str().unwrap()).is_ok());

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_repeat_read_does_not_duplicate_welcome() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = Uuid::new_v4();
        let uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}",
            ws.slug, conv
        );

        for _ in 0..3 {
            let resp = app
                .test_router()
                .oneshot(authed_request(Method::GET, &uri, &jwt, None))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(count_rows(&app, conv).await, 1);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_switching_kind_seeds_without_touching_other_threads() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = Uuid::new_v4();
        let ai_uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=ai_assistant",
            ws.slug, conv
        );
        let hr_uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=hr_assistant",
            ws.slug, conv
        );

        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &ai_uri, &jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &hr_uri, &jwt, None))
            .await
            .unwrap();
        let body = parse_body(resp).await;

        // Both threads now have exactly their own welcome
        assert_eq!(body["threads"]["ai_assistant"].as_array().unwrap().len(), 1);
        assert_eq!(body["threads"]["hr_assistant"].as_array().unwrap().len(), 1);
        assert_ne!(
            body["threads"]["ai_assistant"][0]["content"],
            body["threads"]["hr_assistant"][0]["content"]
        );

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_assistant_kind_rejected() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let uri = format!(
            "/v1/workspaces/{}/chat?assistant=finance_assistant",
            ws.slug
        );
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &uri, &jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_unauthenticated_returns_401() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();

        let uri = format!("/v1/workspaces/{}/chat", ws.slug);
        let req = Request::builder()
            .method(Method::GET)
            .uri(&uri)
            .body(Body::empty())
            .unwrap();

        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_non_member_returns_404() {
        let app = TestApp::new().await.unwrap();
        let owner = app.create_test_user().await.unwrap();
        let outsider = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(owner.id).await.unwrap();
        let jwt = create_test_jwt(&outsider, &app.config.jwt_secret).unwrap();

        let uri = format!("/v1/workspaces/{}/chat", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &uri, &jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        app.cleanup().await.unwrap();
    }
}

mod test_send_message {
    use super::*;

    /// Seed a thread by reading it first; returns the conversation id
    async fn seed_thread(app: &TestApp, slug: &str, jwt: &str, assistant: &str) -> Uuid {
        let conv = Uuid::new_v4();
        let uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant={}",
            slug, conv, assistant
        );
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &uri, jwt, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        conv
    }

    #[tokio::test]
    #[serial]
    async fn test_send_appends_user_and_assistant_rows() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = seed_thread(&app, &ws.slug, &jwt, "hr_assistant").await;

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({
                    "conversation_id": conv,
                    "assistant": "hr_assistant",
                    "content": "What is the PTO policy?"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("What is the PTO policy?"));

        // Welcome + question + reply
        let read_uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=hr_assistant",
            ws.slug, conv
        );
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &read_uri, &jwt, None))
            .await
            .unwrap();
        let body = parse_body(resp).await;
        let hr = body["threads"]["hr_assistant"].as_array().unwrap();
        assert_eq!(hr.len(), 3);
        assert_eq!(hr[1]["role"], "user");
        assert_eq!(hr[1]["content"], "What is the PTO policy?");
        assert_eq!(hr[2]["role"], "assistant");
        assert_eq!(hr[1]["sequence"], 2);
        assert_eq!(hr[2]["sequence"], 3);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_empty_message_rejected_before_persistence() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = seed_thread(&app, &ws.slug, &jwt, "ai_assistant").await;

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({"conversation_id": conv, "content": ""})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Only the welcome row exists
        assert_eq!(count_rows(&app, conv).await, 1);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_whitespace_only_message_rejected_before_persistence() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = seed_thread(&app, &ws.slug, &jwt, "ai_assistant").await;

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({"conversation_id": conv, "content": "   \t  "})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(count_rows(&app, conv).await, 1);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_to_unseeded_thread_returns_404() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({
                    "conversation_id": Uuid::new_v4(),
                    "content": "hello?"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_to_other_kinds_thread_returns_404() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        // Seed only the sales thread, then send to the data analyst thread
        let conv = seed_thread(&app, &ws.slug, &jwt, "sales_assistant").await;

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({
                    "conversation_id": conv,
                    "assistant": "data_analyst",
                    "content": "crunch this"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Sales thread untouched
        assert_eq!(count_rows(&app, conv).await, 1);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_provider_failure_is_soft_and_persists_canned_reply() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = seed_thread(&app, &ws.slug, &jwt, "ai_assistant").await;

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .failing_llm_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({"conversation_id": conv, "content": "hello"})),
            ))
            .await
            .unwrap();

        // Soft failure: HTTP 200, success false, canned message
        assert_eq!(resp.status(), StatusCode::OK);
        let body = parse_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], PROVIDER_FAILURE_TEXT);

        // The canned reply was persisted as the assistant row
        let stored: String = sqlx::query_scalar(
            r#"
            SELECT content FROM chat_messages
            WHERE conversation_id = $1 AND role = 'assistant'
            ORDER BY sequence DESC LIMIT 1
            "#,
        )
        .bind(conv)
        .fetch_one(&app.pool)
        .await
        .unwrap();
        assert_eq!(stored, PROVIDER_FAILURE_TEXT);

        // Welcome + user + canned reply
        assert_eq!(count_rows(&app, conv).await, 3);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_does_not_touch_other_threads() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();
        let jwt = create_test_jwt(&user, &app.config.jwt_secret).unwrap();

        let conv = seed_thread(&app, &ws.slug, &jwt, "ai_assistant").await;

        // Seed the marketing thread on the same conversation
        let uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=marketing_assistant",
            ws.slug, conv
        );
        app.test_router()
            .oneshot(authed_request(Method::GET, &uri, &jwt, None))
            .await
            .unwrap();

        // Send into the ai_assistant thread
        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let resp = app
            .test_router()
            .oneshot(authed_request(
                Method::POST,
                &uri,
                &jwt,
                Some(json!({"conversation_id": conv, "content": "ping"})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // Marketing thread still has exactly its welcome
        let read_uri = format!(
            "/v1/workspaces/{}/chat?conversation_id={}&assistant=marketing_assistant",
            ws.slug, conv
        );
        let resp = app
            .test_router()
            .oneshot(authed_request(Method::GET, &read_uri, &jwt, None))
            .await
            .unwrap();
        let body = parse_body(resp).await;
        assert_eq!(
            body["threads"]["marketing_assistant"]
                .as_array()
                .unwrap()
                .len(),
            1
        );
        assert_eq!(body["threads"]["ai_assistant"].as_array().unwrap().len(), 3);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_send_unauthenticated_returns_401() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_test_user().await.unwrap();
        let (ws, _) = app.create_test_workspace(user.id).await.unwrap();

        let uri = format!("/v1/workspaces/{}/chat/messages", ws.slug);
        let req = Request::builder()
            .method(Method::POST)
            .uri(&uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "conversation_id": Uuid::new_v4(),
                    "content": "hi"
                }))
                .unwrap(),
            ))
            .unwrap();

        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        app.cleanup().await.unwrap();
    }
}
