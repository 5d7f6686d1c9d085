//! Platform content and its engagement data

use std::collections::HashMap;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{EngagementLevel, Niche, Platform};

/// Raw engagement counters for one piece of content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub engagement_rate: f64,
}

/// Derived performance rating: numeric score, categorical level and the
/// per-factor breakdown that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ViralityScore {
    pub score: f64,
    pub level: EngagementLevel,
    pub factors: HashMap<String, f64>,
}

/// A single piece of platform content with its metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub platform: Platform,

    /// Platform-native identifier (not a RankPot id)
    pub content_id: String,

    pub content_url: String,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub thumbnail_url: Option<String>,
    pub caption: String,
    pub metrics: ContentMetrics,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub author_username: Option<String>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub author_followers: Option<u64>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub niche: Option<Niche>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub virality_score: Option<ViralityScore>,
}

/// A `ContentResult` persisted by a user
///
/// On the wire the content fields sit at the top level next to `id`,
/// `savedAt` and `aiScore`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SavedContent {
    #[serde(flatten)]
    pub content: ContentResult,

    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub ai_score: Option<f64>,
}

impl SavedContent {
    pub fn new(
        content: ContentResult,
        id: Uuid,
        saved_at: DateTime<Utc>,
        ai_score: Option<f64>,
    ) -> Self {
        Self {
            content,
            id,
            saved_at,
            ai_score,
        }
    }

    pub fn into_content(self) -> ContentResult {
        self.content
    }
}

impl Deref for SavedContent {
    type Target = ContentResult;

    fn deref(&self) -> &Self::Target {
        &self.content
    }
}
