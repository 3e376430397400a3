//! Reshape raw upstream JSON into the stable response contract.

use crate::error::{ProxyError, Result};
use crate::google::models::{AnnotateImageResponse, LanguagesResponse, TranslateResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of `/api/translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

/// Response body of `/api/ocr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResult {
    pub text: String,
}

/// Upstream `data` object, verbatim. `{}` when absent.
pub fn languages(raw: Value) -> Result<Value> {
    let resp: LanguagesResponse = serde_json::from_value(raw)?;
    Ok(resp
        .data
        .unwrap_or_else(|| Value::Object(Default::default())))
}

/// `data.translations[0]` reduced to `translatedText` and `detectedSourceLanguage`.
pub fn translation(raw: Value) -> Result<TranslateResult> {
    let resp: TranslateResponse = serde_json::from_value(raw)?;
    let first = resp.first_translation().ok_or_else(|| {
        ProxyError::MalformedResponse(
            "Translation API response is missing data.translations[0]".to_string(),
        )
    })?;

    let translated_text = first.translated_text.clone().ok_or_else(|| {
        ProxyError::MalformedResponse(
            "Translation API response is missing translatedText".to_string(),
        )
    })?;

    Ok(TranslateResult {
        translated_text,
        detected_source_language: first.detected_source_language.clone(),
    })
}

/// `responses[0].fullTextAnnotation.text`; no detected text yields `""`.
pub fn ocr(raw: Value) -> Result<OcrResult> {
    let resp: AnnotateImageResponse = serde_json::from_value(raw)?;
    Ok(OcrResult {
        text: resp.full_text().to_string(),
    })
}
