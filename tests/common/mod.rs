use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use rollbook::config::jwt::JwtConfig;
use rollbook::router::init_router;
use rollbook::state::AppState;
use rollbook::store::memory::{MemoryStudentStore, MemoryUserStore};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        expires_in_hours: 1,
    }
}

/// App over the in-memory stores. The returned router is cheap to clone, one
/// clone per `oneshot`.
pub fn setup_test_app() -> Router {
    let state = AppState {
        users: Arc::new(MemoryUserStore::default()),
        students: Arc::new(MemoryStudentStore::default()),
        jwt_config: test_jwt_config(),
    };
    init_router(state)
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Registers a fresh user and returns the issued token.
#[allow(dead_code)]
pub async fn register_and_get_token(app: &Router, username: &str, password: &str) -> String {
    let request = json_request(
        "POST",
        "/register",
        None,
        &serde_json::json!({
            "username": username,
            "password": password
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    let body = read_json(response).await;
    body["token"].as_str().unwrap().to_string()
}
