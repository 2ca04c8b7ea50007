// tests/test_helpers.rs
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use taskflow::api::create_router;
use taskflow::config::SessionConfig;
use taskflow::{AppState, db};

pub const PASSWORD: &str = "correct-horse";

/// Router over an in-memory database with migrations applied
pub async fn create_test_app() -> (Router, Arc<AppState>) {
    let pool = db::connect_in_memory().await.expect("in-memory sqlite");
    db::run_migrations(&pool).await.expect("migrations");

    let session = SessionConfig {
        secret: "test-secret".to_string(),
        secure_cookies: false,
        max_age_days: 7,
    };
    let state = Arc::new(AppState::new(pool, &session).expect("app state"));

    (create_router(state.clone()), state)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn json(method: &str, uri: &str, body: serde_json::Value, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> &str {
    response.headers()[header::SET_COOKIE].to_str().unwrap()
}

/// `name=value` part of the `Set-Cookie` header, ready for a `Cookie` header
pub fn session_cookie(response: &Response<Body>) -> String {
    set_cookie(response).split(';').next().unwrap().to_string()
}

/// Create an account through `POST /join` and return its session cookie
pub async fn sign_up(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(form("/join", &[("email", email), ("password", PASSWORD)], None))
        .await
        .unwrap();
    assert_eq!(response.status(), 303, "signup of {email} failed");
    session_cookie(&response)
}
