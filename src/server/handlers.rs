// HTTP request handlers

use super::routes::AppState;
use crate::error::{ProxyError, Result};
use crate::metrics;
use crate::normalize::{self, OcrResult, TranslateResult};
use crate::validation::{ImageUpload, TranslateRequest};
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Multipart field carrying the image to OCR.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Landing page is optional for the API but the browser client needs it
    let index = Path::new(&state.config.server.static_dir).join("index.html");
    let static_check = if index.is_file() {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Serving {}", index.display()),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: format!("{} not found", index.display()),
        }
    };
    checks.insert("static_files".to_string(), static_check);

    let google = state.google_client.config();
    checks.insert(
        "translation_api".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!(
                "{} (timeout {}s)",
                google.translate_url, google.translate_timeout_seconds
            ),
        },
    );
    checks.insert(
        "vision_api".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{} (timeout {}s)", google.vision_url, google.vision_timeout_seconds),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `/metrics` (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

/// Handler for `GET /api/languages`.
///
/// Returns Google's supported languages with display names, as
/// `{ "languages": [ { "language": "af", "name": "Afrikaans" }, ... ] }`.
pub async fn languages_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    let display_target = &state.config.google.languages_display_target;

    let raw = state
        .google_client
        .fetch_languages(display_target)
        .await
        .map_err(|e| log_failure("languages", e))?;

    let data = normalize::languages(raw).map_err(|e| log_failure("languages", e))?;
    Ok(Json(data))
}

/// Handler for `POST /api/translate`.
///
/// The body is read raw so that a missing or unparsable body reaches the
/// validator (and is reported as missing text) instead of being rejected
/// by an extractor. A body over the request limit is a JSON 400.
pub async fn translate_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<TranslateResult>> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            let err = ProxyError::InvalidRequest(format!(
                "Request body too large (max {} MB).",
                state.config.server.max_translate_body_bytes / (1024 * 1024)
            ));
            return Err(reject("/api/translate", "too_large", err));
        }
        Err(rejection) => {
            debug!("Unreadable translate body: {}", rejection);
            Bytes::new()
        }
    };

    let req = TranslateRequest::from_body(&body, &state.config.google.default_target)
        .map_err(|e| reject("/api/translate", "missing_text", e))?;

    info!(
        "Translate request: target={}, source={}, chars={}",
        req.target,
        req.source.as_deref().unwrap_or("auto"),
        req.text.chars().count()
    );

    let raw = state
        .google_client
        .translate(&req.text, &req.target, req.source.as_deref())
        .await
        .map_err(|e| log_failure("translate", e))?;

    let result = normalize::translation(raw).map_err(|e| log_failure("translate", e))?;
    debug!(
        "Translated (detected source: {})",
        result.detected_source_language.as_deref().unwrap_or("-")
    );

    Ok(Json(result))
}

/// Handler for `POST /api/ocr`.
///
/// Accepts `multipart/form-data` with an `image` file part (PNG/JPG/WebP)
/// and runs Google Vision `DOCUMENT_TEXT_DETECTION` on it.
pub async fn ocr_handler(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<OcrResult>> {
    let max_bytes = state.config.server.max_upload_bytes;

    let mut multipart = multipart.map_err(|e| {
        debug!("Not a multipart request: {}", e);
        reject("/api/ocr", "missing_file", missing_image())
    })?;

    let upload = read_image_field(&mut multipart, max_bytes)
        .await
        .map_err(|e| reject("/api/ocr", rejection_reason(&e), e))?
        .ok_or_else(|| reject("/api/ocr", "missing_file", missing_image()))?;

    let format = upload
        .validate(max_bytes)
        .map_err(|e| reject("/api/ocr", rejection_reason(&e), e))?;

    info!(
        "OCR request: {} bytes, {} ({})",
        upload.data.len(),
        format.mime_type(),
        upload.filename.as_deref().unwrap_or("unnamed")
    );

    let content = base64::engine::general_purpose::STANDARD.encode(&upload.data);
    let raw = state
        .google_client
        .annotate_image(content)
        .await
        .map_err(|e| log_failure("ocr", e))?;

    let result = normalize::ocr(raw).map_err(|e| log_failure("ocr", e))?;
    debug!("OCR extracted {} chars", result.text.chars().count());

    Ok(Json(result))
}

/// Read the first `image` file part. Parts without a filename are form
/// values, not files, and are skipped.
async fn read_image_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<ImageUpload>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        let is_image = field.name() == Some(IMAGE_FIELD);
        let filename = field.file_name().map(str::to_owned);
        if !is_image || filename.is_none() {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;

        return Ok(Some(ImageUpload {
            filename,
            content_type,
            data,
        }));
    }

    Ok(None)
}

fn multipart_error(err: MultipartError, max_bytes: usize) -> ProxyError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ProxyError::PayloadTooLarge(format!(
            "File too large (max {} MB).",
            max_bytes / (1024 * 1024)
        ))
    } else {
        ProxyError::InvalidRequest(format!("Invalid multipart body: {}", err.body_text()))
    }
}

fn missing_image() -> ProxyError {
    ProxyError::InvalidRequest("Missing 'image' file.".to_string())
}

fn rejection_reason(err: &ProxyError) -> &'static str {
    match err {
        ProxyError::PayloadTooLarge(_) => "too_large",
        ProxyError::InvalidRequest(m) if m.starts_with("Unsupported") => "unsupported_type",
        _ => "invalid_file",
    }
}

fn reject(endpoint: &str, reason: &str, err: ProxyError) -> ProxyError {
    debug!("Rejected {} request ({}): {}", endpoint, reason, err);
    metrics::record_rejection(endpoint, reason);
    err
}

fn log_failure(operation: &str, err: ProxyError) -> ProxyError {
    warn!(
        "{} failed: {}",
        operation,
        crate::utils::logging::sanitize(&err.to_string())
    );
    err
}
