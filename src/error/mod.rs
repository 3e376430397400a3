// Error types for the lingolens proxy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// The upstream Google API a call was made against.
///
/// Used to label upstream failures in the error body and in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamApi {
    Languages,
    Translation,
    Vision,
}

impl UpstreamApi {
    /// Human-readable label used in error messages (`"<label> API error: ..."`).
    pub fn label(&self) -> &'static str {
        match self {
            UpstreamApi::Languages => "Languages",
            UpstreamApi::Translation => "Translation",
            UpstreamApi::Vision => "Vision",
        }
    }

    /// Lowercase name used as a metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamApi::Languages => "languages",
            UpstreamApi::Translation => "translation",
            UpstreamApi::Vision => "vision",
        }
    }
}

impl fmt::Display for UpstreamApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    /// The upstream API answered with a non-2xx status.
    #[error("{api} API error: {body}")]
    Upstream {
        api: UpstreamApi,
        status: u16,
        body: String,
    },

    /// Network failure, timeout or an unreadable upstream body.
    #[error("{0}")]
    Transport(String),

    /// The upstream answered 2xx but the payload lacks the fields we need.
    #[error("{0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        // reqwest embeds the request URL, which carries the API key
        let err = err.without_url();
        let mut message = err.to_string();

        // reqwest's own Display is only the error kind; the cause lives in the chain
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }

        if timed_out && !message.contains("timed out") {
            message = format!("request timed out: {}", message);
        }

        ProxyError::Transport(message)
    }
}

// Convert ProxyError to the `{ "error": "..." }` envelope for Axum
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
