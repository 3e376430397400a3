//! Configuration data structures for lingolens.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the upstream Google API endpoints and logging.

use serde::{Deserialize, Serialize};

/// Largest accepted OCR upload: 6 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 6 * 1024 * 1024;

/// Largest accepted `/api/translate` body: 2 MiB.
pub const DEFAULT_MAX_TRANSLATE_BODY_BYTES: usize = 2 * 1024 * 1024;

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, static files, upload ceiling).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Google API settings.
    #[serde(default)]
    pub google: GoogleConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `5000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of tokio worker threads.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Directory served at `/` (must contain `index.html`).
    /// Default: `static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Maximum OCR image size in bytes.
    /// Default: 6 MiB
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Maximum `/api/translate` body size in bytes.
    /// Default: 2 MiB
    #[serde(default = "default_max_translate_body_bytes")]
    pub max_translate_body_bytes: usize,
}

/// Settings for the upstream Google Translation and Vision APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// Translation v2 endpoint. The languages list lives at `{translate_url}/languages`.
    #[serde(default = "default_translate_url")]
    pub translate_url: String,

    /// Vision `images:annotate` endpoint.
    #[serde(default = "default_vision_url")]
    pub vision_url: String,

    /// Language the language names are displayed in.
    #[serde(default = "default_language")]
    pub languages_display_target: String,

    /// Target language used when the client omits one.
    #[serde(default = "default_language")]
    pub default_target: String,

    /// Timeout for languages and translate calls, in seconds.
    #[serde(default = "default_translate_timeout")]
    pub translate_timeout_seconds: u64,

    /// Timeout for image annotation calls, in seconds.
    #[serde(default = "default_vision_timeout")]
    pub vision_timeout_seconds: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Environment variable holding the API key.
    /// Default: `GCP_API_KEY`
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask the API key in logged upstream messages.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_tokens: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            static_dir: default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            max_translate_body_bytes: default_max_translate_body_bytes(),
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            translate_url: default_translate_url(),
            vision_url: default_vision_url(),
            languages_display_target: default_language(),
            default_target: default_language(),
            translate_timeout_seconds: default_translate_timeout(),
            vision_timeout_seconds: default_vision_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_tokens: true,
        }
    }
}

impl GoogleConfig {
    pub fn languages_url(&self) -> String {
        format!("{}/languages", self.translate_url.trim_end_matches('/'))
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_max_translate_body_bytes() -> usize {
    DEFAULT_MAX_TRANSLATE_BODY_BYTES
}

fn default_translate_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_vision_url() -> String {
    "https://vision.googleapis.com/v1/images:annotate".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_translate_timeout() -> u64 {
    15
}

fn default_vision_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_api_key_env() -> String {
    "GCP_API_KEY".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
