#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use faqdesk_api::auth::jwt::{issue_token, JwtConfig};
use faqdesk_api::config::ServerConfig;
use faqdesk_api::middleware::auth::JwtAuthorizer;
use faqdesk_api::router::build_app_router;
use faqdesk_api::state::AppState;
use faqdesk_db::store::MemoryFaqStore;

const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

fn test_jwt_config() -> JwtConfig {
    JwtConfig::with_secret(TEST_JWT_SECRET)
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over the given in-memory store.
///
/// Uses the same middleware stack as production.
pub fn build_test_app(store: Arc<MemoryFaqStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        authorizer: Arc::new(JwtAuthorizer::new(config.jwt.clone())),
    };
    build_app_router(state, &config)
}

/// Mint an access token the test app will accept.
pub fn token_for(user_id: i64, role: &str) -> String {
    issue_token(user_id, role, &test_jwt_config()).expect("token generation should succeed")
}

/// Send a request with an optional raw body and optional bearer token.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string()), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json.to_string()), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
