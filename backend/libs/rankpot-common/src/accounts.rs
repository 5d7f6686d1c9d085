use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ContentMetrics;
use crate::enums::Platform;

/// Platform account linked to a user (OAuth-connected, can publish)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConnectedAccount {
    pub id: Uuid,
    pub platform: Platform,
    pub account_name: String,
    pub account_url: String,
    pub followers_count: u64,
    pub connected_at: DateTime<Utc>,
}

/// Platform account a user watches without owning it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrackedAccount {
    pub id: Uuid,
    pub platform: Platform,
    pub account_name: String,
    pub account_url: String,
    /// Unknown until the first check completes
    #[serde(deserialize_with = "crate::nullable::required")]
    pub followers_count: Option<u64>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub last_checked_at: Option<DateTime<Utc>>,
}

/// Content item of a tracked account, sampled over time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrackedContent {
    pub id: Uuid,
    pub content_id: String,
    pub content_url: String,
    pub caption: String,
    pub posted_at: DateTime<Utc>,
    pub metrics: ContentMetrics,
    pub is_viral: bool,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub ai_score: Option<f64>,
}
