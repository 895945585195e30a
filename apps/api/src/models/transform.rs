use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::providers::failure::ErrorCode;

/// Requested transformation of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Summary,
    Personalized,
}

impl ContentMode {
    /// Human label used in remediation text ("Summary mode").
    pub fn label(self) -> &'static str {
        match self {
            ContentMode::Summary => "Summary",
            ContentMode::Personalized => "Personalized",
        }
    }
}

impl FromStr for ContentMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(ContentMode::Summary),
            "personalized" => Ok(ContentMode::Personalized),
            _ => Err(()),
        }
    }
}

/// Body as received. Every field is optional here so that missing fields
/// surface as a 400 with our own message rather than a deserializer error.
/// `mode` is left untyped so a number or object is reported as an invalid mode.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransformRequest {
    pub mode: Option<Value>,
    pub lesson_path: Option<String>,
    pub original_content: Option<String>,
    pub professional_background: Option<String>,
}

/// A validated transform request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub mode: ContentMode,
    /// Opaque, echoed back untouched.
    pub lesson_path: Option<String>,
    pub original_content: String,
    pub professional_background: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    pub mode: ContentMode,
    /// Transformed lesson markdown, or remediation text when `error` is set.
    pub content: String,
    pub lesson_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_background: Option<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_is_exact() {
        assert_eq!("summary".parse(), Ok(ContentMode::Summary));
        assert_eq!("personalized".parse(), Ok(ContentMode::Personalized));
        assert!("Summary".parse::<ContentMode>().is_err());
        assert!("original".parse::<ContentMode>().is_err());
    }

    #[test]
    fn test_response_omits_optional_fields() {
        let response = TransformResponse {
            mode: ContentMode::Summary,
            content: "# Short".to_string(),
            lesson_path: Some("/docs/part-1/lesson-1".to_string()),
            professional_background: None,
            generated_at: Utc::now(),
            cached: None,
            error: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mode"], "summary");
        assert_eq!(value["lessonPath"], "/docs/part-1/lesson-1");
        assert!(value.get("professionalBackground").is_none());
        assert!(value.get("error").is_none());
        assert!(value.get("cached").is_none());
        assert!(value["generatedAt"].is_string());
    }
}
