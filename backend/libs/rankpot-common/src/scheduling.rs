use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::PostStatus;

/// Post queued for future publication on a connected account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub id: Uuid,
    pub connected_account_id: Uuid,
    pub content_type: String,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub scheduled_for: DateTime<Utc>,
    pub status: PostStatus,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub published_at: Option<DateTime<Utc>>,
    /// Set when `status` is `failed`
    #[serde(deserialize_with = "crate::nullable::required")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(status: &str) -> serde_json::Value {
        json!({
            "id": "0b6d7a52-8f0f-4f6a-a1f7-3d9a2f5c1e01",
            "connectedAccountId": "7c1e9d0a-2b3c-4d5e-8f90-a1b2c3d4e5f6",
            "contentType": "video",
            "caption": "Launch day",
            "mediaUrls": ["https://cdn.rankpot.com/m/1.mp4"],
            "scheduledFor": "2024-06-01T17:00:00Z",
            "status": status,
            "publishedAt": null,
            "errorMessage": null
        })
    }

    #[test]
    fn every_enumerated_status_is_accepted() {
        for status in PostStatus::ALL {
            let post: ScheduledPost = serde_json::from_value(payload(status.as_str())).unwrap();
            assert_eq!(post.status, status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        for bad in ["queued", "PUBLISHED", "pending-review", ""] {
            assert!(
                serde_json::from_value::<ScheduledPost>(payload(bad)).is_err(),
                "status {bad:?} should not deserialize"
            );
        }
    }

    #[test]
    fn nullable_keys_must_be_present() {
        for key in ["publishedAt", "errorMessage"] {
            let mut value = payload("scheduled");
            value.as_object_mut().unwrap().remove(key);
            assert!(
                serde_json::from_value::<ScheduledPost>(value).is_err(),
                "ScheduledPost without {key:?} should be rejected"
            );
        }
    }
}
