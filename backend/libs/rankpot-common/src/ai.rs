//! AI-derived analysis, ideas and captions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ViralityScore;
use crate::enums::{EngagementLevel, Niche};

/// Quality breakdown produced by the AI analysis of one content item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// Platform-native id of the analyzed content
    pub content_id: String,
    pub virality_score: ViralityScore,
    pub hook_effectiveness: f64,
    pub visual_quality: f64,
    pub caption_quality: f64,
    pub hashtag_optimization: f64,
    pub timing_score: f64,
    pub suggestions: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Generated idea for a new piece of content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContentIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub niche: Niche,
    pub suggested_hashtags: Vec<String>,
    pub estimated_engagement: EngagementLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCaption {
    pub text: String,
    pub hashtags: Vec<String>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub call_to_action: Option<String>,
    /// Free-form estimate as returned by the model
    pub estimated_engagement: String,
}
