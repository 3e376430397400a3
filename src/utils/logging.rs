//! Structured logging and secret-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps the
//! Google API key out of log output.

use crate::config::LoggingConfig;
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static SANITIZE_ENABLED: AtomicBool = AtomicBool::new(true);

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    SANITIZE_ENABLED.store(config.sanitize_tokens, Ordering::Relaxed);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes Google API keys from log messages.
///
/// Two patterns are replaced:
/// - `key=<value>` query parameters, as they appear in request URLs.
/// - Bare Google API keys, which start with `AIza`.
///
/// Returns the input unchanged when sanitizing was disabled in the
/// logging configuration.
pub fn sanitize(input: &str) -> String {
    if !SANITIZE_ENABLED.load(Ordering::Relaxed) {
        return input.to_string();
    }

    let result = redact_after(input, "key=", "key=[REDACTED]");
    redact_after(&result, "AIza", "[REDACTED_API_KEY]")
}

/// Replace every occurrence of `marker` and the token following it.
fn redact_after(input: &str, marker: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        result.push_str(&rest[..pos]);
        let token = &rest[pos + marker.len()..];
        // Token ends at a delimiter or end of string
        let end = token
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ')' | ','))
            .unwrap_or(token.len());
        result.push_str(replacement);
        rest = &token[end..];
    }
    result.push_str(rest);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_query_key() {
        let input = "error sending request for url (https://translation.googleapis.com/language/translate/v2?key=secret123&q=hi)";
        let output = sanitize(input);
        assert!(output.contains("key=[REDACTED]&q=hi"));
        assert!(!output.contains("secret123"));
    }

    #[test]
    fn test_sanitize_bare_api_key() {
        let input = "API key AIzaSyD-abc_123 not valid. Please pass a valid API key.";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("SyD-abc_123"));
    }

    #[test]
    fn test_sanitize_multiple_occurrences() {
        let output = sanitize("a?key=one b?key=two");
        assert_eq!(output, "a?key=[REDACTED] b?key=[REDACTED]");
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        assert_eq!(sanitize("no secrets here"), "no secrets here");
    }
}
