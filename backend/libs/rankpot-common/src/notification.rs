use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// User-facing event record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,

    /// Event kind, e.g. "post_published" or "viral_alert"
    #[serde(rename = "type")]
    pub notification_type: String,

    pub title: String,
    pub message: String,

    /// Opaque payload; its shape depends on `type`
    #[serde(deserialize_with = "crate::nullable::required")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub data: Option<Map<String, Value>>,

    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Look up a payload field
    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}
