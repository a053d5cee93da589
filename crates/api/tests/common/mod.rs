#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use greeter_core::error::CoreError;
use greeter_core::hello::{
    CreateHelloMessage, CreateHelloMessageRequest, CreateHelloMessageResponse,
    HelloMessageInteractor,
};
use greeter_core::validation::{Locale, MessageCatalog, Validator};
use http_body_util::BodyExt;
use tower::ServiceExt;

use greeter_api::config::ServerConfig;
use greeter_api::router::build_app_router;
use greeter_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and Japanese validation messages.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: 64 * 1024,
        message_locale: Locale::Ja,
        json_logs: false,
    }
}

/// A use case that always fails, for exercising the 500 path.
pub struct FailingHelloMessage;

#[async_trait]
impl CreateHelloMessage for FailingHelloMessage {
    async fn execute(
        &self,
        _request: CreateHelloMessageRequest,
    ) -> Result<CreateHelloMessageResponse, CoreError> {
        Err(CoreError::Unavailable("message store offline".into()))
    }
}

/// Build the full application router around the given use case and config.
pub fn build_app_with(
    config: ServerConfig,
    create_hello_message: Arc<dyn CreateHelloMessage>,
) -> Router {
    let catalog = Arc::new(MessageCatalog::builtin(config.message_locale));
    let state = AppState {
        config: Arc::new(config.clone()),
        validator: Arc::new(Validator::new(catalog)),
        create_hello_message,
    };
    build_app_router(state, &config)
}

/// Build the full application router with the default use case.
pub fn build_test_app() -> Router {
    build_app_with(test_config(), Arc::new(HelloMessageInteractor))
}

/// Send a POST request with a raw body and JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, serde_json::to_vec(&json).unwrap()).await
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
