//! Content search request and response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::content::ContentResult;
use crate::enums::{EngagementLevel, Niche, Platform, SortOption};

/// Search parameters; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<Niche>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_level: Option<EngagementLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_ai_scores: Option<bool>,
    #[validate(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

fn validate_date_range(options: &SearchOptions) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (options.date_range_start, options.date_range_end) {
        if start > end {
            let mut err = ValidationError::new("date_range");
            err.message = Some("dateRangeStart must not be after dateRangeEnd".into());
            return Err(err);
        }
    }
    Ok(())
}

/// Result envelope for a content search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ContentResult>,
    /// Matches before the limit was applied
    pub total_count: u64,
    /// Served from the search cache
    pub cached: bool,
}

impl SearchResponse {
    /// Whether `results` fits inside the requested limit
    pub fn respects_limit(&self, options: &SearchOptions) -> bool {
        match options.limit {
            Some(limit) => self.results.len() <= limit as usize,
            None => true,
        }
    }

    /// Drop results past the requested limit, keeping `total_count`
    pub fn truncate_to(mut self, options: &SearchOptions) -> Self {
        if let Some(limit) = options.limit {
            self.results.truncate(limit as usize);
        }
        self
    }
}
