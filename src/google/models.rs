//! Wire types for the Google Translation v2 and Vision v1 APIs.
//!
//! Outgoing requests are fully typed. Incoming responses are decoded into
//! structs whose fields are all optional, and the normalizers walk them
//! through explicit accessors so a missing level never panics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query string of a `translate/v2` call.
#[derive(Debug, Clone, Serialize)]
pub struct TranslateQuery<'a> {
    pub key: &'a str,
    pub q: &'a str,
    pub target: &'a str,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

impl<'a> TranslateQuery<'a> {
    /// Build the query. `source` is dropped when empty or `auto`.
    pub fn new(key: &'a str, text: &'a str, target: &'a str, source: Option<&'a str>) -> Self {
        Self {
            key,
            q: text,
            target,
            format: "text",
            source: source.filter(|s| !s.is_empty() && *s != "auto"),
        }
    }
}

/// Body of an `images:annotate` call.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotateImageRequest {
    pub requests: Vec<ImageRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
}

impl AnnotateImageRequest {
    /// A single-image `DOCUMENT_TEXT_DETECTION` request.
    pub fn document_text(content_b64: String) -> Self {
        Self {
            requests: vec![ImageRequest {
                image: ImageContent {
                    content: content_b64,
                },
                features: vec![Feature {
                    feature_type: "DOCUMENT_TEXT_DETECTION".to_string(),
                }],
            }],
        }
    }
}

/// Envelope of the languages list response: `{ "data": { "languages": [...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagesResponse {
    /// Kept as raw JSON; passed through to the client unmodified.
    #[serde(default)]
    pub data: Option<Value>,
}

/// Envelope of a translate response: `{ "data": { "translations": [...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub data: Option<TranslationData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: Option<String>,
    pub detected_source_language: Option<String>,
}

impl TranslateResponse {
    /// `data.translations[0]`, if every level is present.
    pub fn first_translation(&self) -> Option<&Translation> {
        self.data.as_ref()?.translations.first()
    }
}

/// Envelope of an annotate response: `{ "responses": [ { "fullTextAnnotation": {...} } ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResult {
    pub full_text_annotation: Option<TextAnnotation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAnnotation {
    pub text: Option<String>,
}

impl AnnotateImageResponse {
    /// `responses[0].fullTextAnnotation.text`, or `""` when any level is missing.
    pub fn full_text(&self) -> &str {
        self.responses
            .first()
            .and_then(|r| r.full_text_annotation.as_ref())
            .and_then(|a| a.text.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_translate_query_omits_auto_source() {
        for source in [None, Some(""), Some("auto")] {
            let query = TranslateQuery::new("k", "Hello", "es", source);
            let value = serde_json::to_value(&query).unwrap();
            assert!(value.get("source").is_none(), "source {:?} leaked", source);
            assert_eq!(value["format"], "text");
            assert_eq!(value["q"], "Hello");
        }
    }

    #[test]
    fn test_translate_query_keeps_explicit_source() {
        let query = TranslateQuery::new("k", "Hallo", "en", Some("de"));
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["source"], "de");
        assert_eq!(value["target"], "en");
    }

    #[test]
    fn test_annotate_request_format() {
        let request = AnnotateImageRequest::document_text("aGVsbG8=".to_string());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "requests": [{
                    "image": {"content": "aGVsbG8="},
                    "features": [{"type": "DOCUMENT_TEXT_DETECTION"}]
                }]
            })
        );
    }

    #[test]
    fn test_full_text_defaults_to_empty() {
        let cases = [
            json!({}),
            json!({"responses": []}),
            json!({"responses": [{}]}),
            json!({"responses": [{"fullTextAnnotation": {}}]}),
        ];
        for case in cases {
            let resp: AnnotateImageResponse = serde_json::from_value(case).unwrap();
            assert_eq!(resp.full_text(), "");
        }
    }

    #[test]
    fn test_full_text_present() {
        let resp: AnnotateImageResponse = serde_json::from_value(json!({
            "responses": [{"fullTextAnnotation": {"text": "STOP\n", "pages": []}}]
        }))
        .unwrap();
        assert_eq!(resp.full_text(), "STOP\n");
    }

    #[test]
    fn test_first_translation_missing_levels() {
        let resp: TranslateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.first_translation().is_none());

        let resp: TranslateResponse =
            serde_json::from_value(json!({"data": {"translations": []}})).unwrap();
        assert!(resp.first_translation().is_none());
    }
}
