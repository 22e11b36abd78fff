#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Method, Request, StatusCode};
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub fn test_app() -> Router {
    sample_data_api::app()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send_request_with_method(
    app: &Router,
    uri: &str,
    method: Method,
    origin: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().uri(uri).method(method);

    if let Some(origin) = origin {
        builder = builder.header(http::header::ORIGIN, origin);
    }

    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn send_request(app: &Router, uri: &str) -> TestResponse {
    send_request_with_method(app, uri, Method::GET, None).await
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let app = app.clone();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}
