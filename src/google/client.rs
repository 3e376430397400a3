// Google Cloud API client for translation, language listing and OCR

use super::models::{AnnotateImageRequest, TranslateQuery};
use crate::config::{ApiKey, GoogleConfig};
use crate::error::{ProxyError, Result, UpstreamApi};
use crate::metrics;
use crate::utils::logging::sanitize;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the Google Translation v2 and Vision v1 APIs.
///
/// Every call is a single attempt bounded by a timeout. Failures are
/// returned as [`ProxyError::Upstream`] when Google answered with a non-2xx
/// status and as [`ProxyError::Transport`] otherwise.
pub struct GoogleClient {
    http_client: Client,
    config: GoogleConfig,
    api_key: ApiKey,
}

impl GoogleClient {
    /// Create a new client with a pooled HTTP connection.
    pub fn new(config: &GoogleConfig, api_key: ApiKey) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for Google APIs");

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
        })
    }

    pub fn config(&self) -> &GoogleConfig {
        &self.config
    }

    /// List supported languages with names localized to `display_target`.
    ///
    /// Returns the raw upstream JSON.
    pub async fn fetch_languages(&self, display_target: &str) -> Result<Value> {
        let url = self.config.languages_url();
        debug!("Fetching languages (display target: {})", display_target);

        let request = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.expose()), ("target", display_target)])
            .timeout(Duration::from_secs(self.config.translate_timeout_seconds));

        self.send(UpstreamApi::Languages, request).await
    }

    /// Translate `text` into `target`. `source` is only forwarded when it is
    /// set and not `auto`.
    ///
    /// Returns the raw upstream JSON.
    pub async fn translate(&self, text: &str, target: &str, source: Option<&str>) -> Result<Value> {
        let query = TranslateQuery::new(self.api_key.expose(), text, target, source);
        debug!(
            "Translating {} chars to {} (source: {})",
            text.chars().count(),
            target,
            query.source.unwrap_or("auto")
        );

        let request = self
            .http_client
            .post(&self.config.translate_url)
            .query(&query)
            .timeout(Duration::from_secs(self.config.translate_timeout_seconds));

        self.send(UpstreamApi::Translation, request).await
    }

    /// Run `DOCUMENT_TEXT_DETECTION` on a base64-encoded image.
    ///
    /// Returns the raw upstream JSON.
    pub async fn annotate_image(&self, content_b64: String) -> Result<Value> {
        debug!("Annotating image ({} base64 chars)", content_b64.len());

        let body = AnnotateImageRequest::document_text(content_b64);
        let request = self
            .http_client
            .post(&self.config.vision_url)
            .query(&[("key", self.api_key.expose())])
            .json(&body)
            .timeout(Duration::from_secs(self.config.vision_timeout_seconds));

        self.send(UpstreamApi::Vision, request).await
    }

    /// Send one request and decode the JSON body, classifying failures.
    async fn send(&self, api: UpstreamApi, request: RequestBuilder) -> Result<Value> {
        let start = Instant::now();
        let result = self.send_inner(api, request).await;
        let elapsed = start.elapsed().as_secs_f64();

        let outcome = match &result {
            Ok(_) => "success",
            Err(ProxyError::Upstream { .. }) => "upstream_error",
            Err(_) => "transport_error",
        };
        metrics::record_upstream_call(api.as_str(), outcome, elapsed);

        result
    }

    async fn send_inner(&self, api: UpstreamApi, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.map_err(|e| {
            let err = ProxyError::from(e);
            error!("{} API request failed: {}", api, sanitize(&err.to_string()));
            err
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ProxyError::from)?;

        if !status.is_success() {
            error!(
                "{} API error: HTTP {} - Response body: {}",
                api,
                status,
                sanitize(&body)
            );
            return Err(ProxyError::Upstream {
                api,
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            "{} API response (first 200 chars): {}",
            api,
            sanitize(&body.chars().take(200).collect::<String>())
        );

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {} API response: {}", api, e);
            ProxyError::Transport(format!("Invalid {} API response: {}", api, e))
        })
    }
}
