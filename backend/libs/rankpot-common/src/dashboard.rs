//! Read-model aggregates for the analytics dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::accounts::ConnectedAccount;
use crate::content::ContentResult;

/// Summary across every connected account of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub accounts: Vec<ConnectedAccount>,
    pub total_followers: u64,
    /// Relative change over the reporting window, may be negative
    pub follower_growth: f64,
    pub total_engagement: u64,
    pub engagement_growth: f64,
    pub top_performing_content: Vec<ContentResult>,
}

/// Daily statistics for one connected account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub engagement_rate: f64,
}

/// Posting slot with its expected engagement lift
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OptimalTime {
    /// 0 = Sunday .. 6 = Saturday
    #[validate(range(max = 6))]
    pub day_of_week: u8,
    #[validate(range(max = 23))]
    pub hour: u8,
    pub expected_engagement_lift: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub account: ConnectedAccount,
    pub snapshots: Vec<AnalyticsSnapshot>,
    pub optimal_times: Vec<OptimalTime>,
}
