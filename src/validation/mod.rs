//! Request validation for the translate and OCR endpoints.
//!
//! Validators turn raw request input into typed, checked values or a
//! client-facing [`ProxyError`] (400 / 413). They never touch the network.
//!
//! # Submodules
//!
//! - `image`: accepted image formats and the MIME/extension whitelist.

pub mod image;

pub use image::ImageFormat;

use crate::error::{ProxyError, Result};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateRequest {
    /// Text to translate, trimmed and non-empty.
    pub text: String,
    /// Target language code, trimmed.
    pub target: String,
    /// Lower-cased source language. `None` lets Google detect it.
    pub source: Option<String>,
}

impl TranslateRequest {
    /// Validate a raw `/api/translate` body.
    ///
    /// A body that is not a JSON object is treated as `{}`, and fields that
    /// are not strings are treated as missing.
    pub fn from_body(body: &[u8], default_target: &str) -> Result<Self> {
        let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let text = string_field(&payload, "text");
        if text.is_empty() {
            return Err(ProxyError::InvalidRequest("missing 'text'".to_string()));
        }

        let target = match string_field(&payload, "target") {
            t if t.is_empty() => default_target.to_string(),
            t => t,
        };

        let source = string_field(&payload, "source").to_lowercase();
        let source = if source.is_empty() || source == "auto" {
            None
        } else {
            Some(source)
        };

        Ok(Self {
            text,
            target,
            source,
        })
    }
}

/// Trimmed string value of `payload[name]`, or `""`.
fn string_field(payload: &Value, name: &str) -> String {
    payload
        .get(name)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// An uploaded file part from the OCR form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ImageUpload {
    /// Check the upload against the type whitelist and the size ceiling.
    ///
    /// The file is accepted when either its declared MIME type or its
    /// filename extension is whitelisted. The size check runs on the exact
    /// byte length and only after the type check.
    pub fn validate(&self, max_bytes: usize) -> Result<ImageFormat> {
        let format = self
            .content_type
            .as_deref()
            .and_then(ImageFormat::from_mime_type)
            .or_else(|| self.filename.as_deref().and_then(ImageFormat::from_filename))
            .ok_or_else(|| {
                ProxyError::InvalidRequest("Unsupported file type. Use PNG/JPG/WEBP.".to_string())
            })?;

        if self.data.len() > max_bytes {
            return Err(ProxyError::PayloadTooLarge(format!(
                "File too large (max {} MB).",
                max_bytes / (1024 * 1024)
            )));
        }

        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    fn upload(filename: Option<&str>, content_type: Option<&str>, len: usize) -> ImageUpload {
        ImageUpload {
            filename: filename.map(String::from),
            content_type: content_type.map(String::from),
            data: Bytes::from(vec![0u8; len]),
        }
    }

    #[test]
    fn test_translate_defaults() {
        let req = TranslateRequest::from_body(br#"{"text": "  Hello  "}"#, "en").unwrap();
        assert_eq!(req.text, "Hello");
        assert_eq!(req.target, "en");
        assert_eq!(req.source, None);
    }

    #[test]
    fn test_translate_source_normalization() {
        let req =
            TranslateRequest::from_body(br#"{"text": "Hallo", "target": "es", "source": " DE "}"#, "en")
                .unwrap();
        assert_eq!(req.source.as_deref(), Some("de"));
        assert_eq!(req.target, "es");

        let req =
            TranslateRequest::from_body(br#"{"text": "Hallo", "source": "AUTO"}"#, "en").unwrap();
        assert_eq!(req.source, None);
    }

    #[test]
    fn test_translate_blank_text_rejected() {
        let bodies: [&[u8]; 7] = [
            br#"{"text": ""}"#,
            br#"{"text": "   ", "target": "fr"}"#,
            br#"{"target": "fr"}"#,
            br#"{"text": 42}"#,
            br#"[1, 2, 3]"#,
            b"not json",
            b"",
        ];
        for body in bodies {
            let err = TranslateRequest::from_body(body, "en").unwrap_err();
            assert!(matches!(err, ProxyError::InvalidRequest(ref m) if m == "missing 'text'"));
        }
    }

    #[test]
    fn test_translate_empty_target_uses_default() {
        let req = TranslateRequest::from_body(br#"{"text": "hi", "target": "  "}"#, "ja").unwrap();
        assert_eq!(req.target, "ja");
    }

    #[test]
    fn test_image_accepted_by_mime() {
        let format = upload(Some("scan.bin"), Some("image/webp"), 10)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .unwrap();
        assert_eq!(format, ImageFormat::WebP);
    }

    #[test]
    fn test_image_accepted_by_extension_fallback() {
        let format = upload(Some("Photo.PNG"), Some("application/octet-stream"), 10)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .unwrap();
        assert_eq!(format, ImageFormat::Png);

        assert!(upload(Some("photo.jpeg"), None, 10)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .is_ok());
    }

    #[test]
    fn test_image_unsupported_type() {
        let err = upload(Some("anim.gif"), Some("image/gif"), 10)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type. Use PNG/JPG/WEBP.");
    }

    #[test]
    fn test_image_size_boundary() {
        assert!(upload(Some("a.png"), Some("image/png"), DEFAULT_MAX_UPLOAD_BYTES)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .is_ok());

        let err = upload(Some("a.png"), Some("image/png"), DEFAULT_MAX_UPLOAD_BYTES + 1)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .unwrap_err();
        assert!(matches!(err, ProxyError::PayloadTooLarge(_)));
        assert_eq!(err.to_string(), "File too large (max 6 MB).");
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = upload(Some("huge.tiff"), Some("image/tiff"), DEFAULT_MAX_UPLOAD_BYTES + 1)
            .validate(DEFAULT_MAX_UPLOAD_BYTES)
            .unwrap_err();
        assert!(matches!(err, ProxyError::InvalidRequest(_)));
    }
}
