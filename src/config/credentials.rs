//! Startup loading of the Google Cloud API key.
//!
//! The key is read once, before the server binds, and is then shared
//! read-only with the upstream client. A missing key aborts startup.

use crate::error::{ProxyError, Result};
use std::fmt;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Google Cloud API key.
///
/// `Debug` never prints the value and the backing memory is zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Load the key from `var`, after merging a `.env` file from the
    /// working directory into the environment (existing variables win).
    pub fn from_env(var: &str) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ProxyError::Config(format!("Failed to read .env: {}", e))),
        }

        let key = Self::from_value(var, std::env::var(var).ok())?;
        info!("Loaded API key from {}", var);
        Ok(key)
    }

    /// Validate a raw value read from `var`. Blank values count as missing.
    pub fn from_value(var: &str, value: Option<String>) -> Result<Self> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Ok(Self(v)),
            _ => Err(ProxyError::Config(format!(
                "{} not set. Put it in .env or set env var.",
                var
            ))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_with_variable_name() {
        let err = ApiKey::from_value("GCP_API_KEY", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: GCP_API_KEY not set. Put it in .env or set env var."
        );
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(ApiKey::from_value("GCP_API_KEY", Some("   ".into())).is_err());
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::from_value("GCP_API_KEY", Some(" AIzaTest \n".into())).unwrap();
        assert_eq!(key.expose(), "AIzaTest");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("AIzaSecretValue");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("AIzaSecretValue"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_from_env_reads_variable() {
        std::env::set_var("LINGOLENS_TEST_KEY_PRESENT", "AIzaFromEnv");
        let key = ApiKey::from_env("LINGOLENS_TEST_KEY_PRESENT").unwrap();
        assert_eq!(key.expose(), "AIzaFromEnv");
    }

    #[test]
    fn test_from_env_missing_variable() {
        assert!(ApiKey::from_env("LINGOLENS_TEST_KEY_DEFINITELY_UNSET").is_err());
    }
}
