// Shared helpers for integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lingolens::config::{ApiKey, AppConfig};
use lingolens::google::GoogleClient;
use lingolens::server::create_router;
use serde_json::Value;

pub const TEST_KEY: &str = "test-key";
pub const BOUNDARY: &str = "lingolens-test-boundary";

/// Config pointing every Google endpoint at `base_url`.
pub fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.google.translate_url = format!("{}/language/translate/v2", base_url);
    config.google.vision_url = format!("{}/v1/images:annotate", base_url);
    config
}

pub fn app_with_config(config: AppConfig) -> Router {
    let client = GoogleClient::new(&config.google, ApiKey::new(TEST_KEY)).unwrap();
    create_router(config, client).unwrap()
}

pub fn app(base_url: &str) -> Router {
    app_with_config(config_for(base_url))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// A `multipart/form-data` request with a single file part named `field`.
pub fn multipart_request(
    field: &str,
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            BOUNDARY, field, filename
        )
        .as_bytes(),
    );
    if let Some(ct) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/ocr")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}
