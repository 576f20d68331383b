use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        api::{create_submission, get_submissions},
        health::livez,
        invoke::{invoke_list, invoke_submit},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // The contact form is usually served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/submissions",
            get(get_submissions).post(create_submission),
        )
        .layer(cors);

    let invoke_routes = Router::new()
        .route("/submit", post(invoke_submit))
        .route("/list", post(invoke_list));

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .nest("/invoke", invoke_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_string(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_submissions_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/submissions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let json: Vec<serde_json::Value> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json.is_empty());
    }

    #[tokio::test]
    async fn test_create_and_list_submission() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submissions")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Alice","email":"a@x.com","message":"hi"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "Hi Alice, your message has been saved!");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/submissions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let items: Vec<serde_json::Value> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_create_submission_malformed_body() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submissions")
                    .body(Body::from("name=Alice"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_submission_non_utf8_body() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submissions")
                    .body(Body::from(vec![0xff_u8, 0xfe, b'{']))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Request body is not valid UTF-8"));
    }

    #[tokio::test]
    async fn test_invoke_submit_non_utf8_event() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke/submit")
                    .body(Body::from(vec![0xff_u8, 0xfe]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(envelope["statusCode"], 500);

        let inner: serde_json::Value =
            serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert!(!inner["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invoke_submit_returns_envelope() {
        let app = create_app(AppState::default());
        let event = serde_json::json!({
            "body": r#"{"email":"b@x.com"}"#,
            "httpMethod": "POST",
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke/submit")
                    .body(Body::from(event.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(envelope["statusCode"], 200);

        let inner: serde_json::Value =
            serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert_eq!(inner["message"], "Hi None, your message has been saved!");
    }

    #[tokio::test]
    async fn test_invoke_submit_unreadable_event() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke/submit")
                    .body(Body::from("not an event"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(envelope["statusCode"], 500);

        let inner: serde_json::Value =
            serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert!(inner["error"].is_string());
    }

    #[tokio::test]
    async fn test_invoke_list_ignores_event() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/invoke/list")
                    .body(Body::from("anything at all"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(envelope["statusCode"], 200);
        assert_eq!(envelope["body"], "[]");
    }
}
