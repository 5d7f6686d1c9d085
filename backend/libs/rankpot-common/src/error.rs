//! Error envelope returned by every failing API call
//!
//! `{ "error": "...", "errorCode": "...", "detail": ... }` where `detail` is
//! optional and either a plain string or a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message
    pub error: String,

    /// Machine-readable code, e.g. "not_found"
    pub error_code: String,

    /// A plain string or a JSON object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Value>))]
    pub detail: Option<ApiErrorDetail>,
}

/// Structured or string detail attached to an `ApiError`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Message(String),
    Fields(Map<String, Value>),
}

impl ApiError {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.into(),
            detail: None,
        }
    }

    pub fn with_detail_message(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(ApiErrorDetail::Message(detail.into()));
        self
    }

    pub fn with_detail_fields(mut self, fields: Map<String, Value>) -> Self {
        self.detail = Some(ApiErrorDetail::Fields(fields));
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.error_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_is_omitted_when_absent() {
        let err = ApiError::new("Resource not found", "not_found");
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value, json!({"error": "Resource not found", "errorCode": "not_found"}));
    }

    #[test]
    fn string_detail() {
        let err = ApiError::new("Bad request", "invalid_request")
            .with_detail_message("limit must be >= 1");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["detail"], "limit must be >= 1");

        let back: ApiError = serde_json::from_value(value).unwrap();
        assert_eq!(
            back.detail,
            Some(ApiErrorDetail::Message("limit must be >= 1".into()))
        );
    }

    #[test]
    fn object_detail() {
        let payload = json!({
            "error": "Validation failed",
            "errorCode": "validation",
            "detail": {"limit": ["range"]}
        });

        let err: ApiError = serde_json::from_value(payload).unwrap();
        match err.detail {
            Some(ApiErrorDetail::Fields(fields)) => assert!(fields.contains_key("limit")),
            other => panic!("expected object detail, got {other:?}"),
        }
    }

    #[test]
    fn detail_cannot_be_a_number() {
        let payload = json!({"error": "x", "errorCode": "y", "detail": 42});
        assert!(serde_json::from_value::<ApiError>(payload).is_err());
    }

    #[test]
    fn display_includes_code() {
        assert_eq!(
            ApiError::new("Quota exceeded", "quota_exceeded").to_string(),
            "Quota exceeded (quota_exceeded)"
        );
    }
}
