//! Closed string enumerations of the API contract.
//!
//! Each enum serializes as its snake_case wire string. `FromStr` accepts
//! exactly those strings and nothing else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string is not one of an enum's wire values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `Display` and `FromStr` on top of `as_str()` and `ALL`
macro_rules! wire_string {
    ($ty:ident, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// Social platform a piece of content or an account lives on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Tiktok,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Tiktok, Platform::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }
}

wire_string!(Platform, "platform");

/// Fixed content-category classification used for filtering and search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Niche {
    FitnessWellness,
    EcommerceDtc,
    FinanceCrypto,
    TechSaas,
    LifestyleTravel,
}

impl Niche {
    pub const ALL: [Niche; 5] = [
        Niche::FitnessWellness,
        Niche::EcommerceDtc,
        Niche::FinanceCrypto,
        Niche::TechSaas,
        Niche::LifestyleTravel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::FitnessWellness => "fitness_wellness",
            Niche::EcommerceDtc => "ecommerce_dtc",
            Niche::FinanceCrypto => "finance_crypto",
            Niche::TechSaas => "tech_saas",
            Niche::LifestyleTravel => "lifestyle_travel",
        }
    }
}

wire_string!(Niche, "niche");

/// Subscription plan level gating usage quotas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Starter,
    Pro,
    Business,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Starter,
        SubscriptionTier::Pro,
        SubscriptionTier::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Starter => "starter",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Business => "business",
        }
    }
}

wire_string!(SubscriptionTier, "subscription tier");

/// Ordering requested for content search results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    Recent,
    Engaged,
    Viral,
    FastestGrowing,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Recent,
        SortOption::Engaged,
        SortOption::Viral,
        SortOption::FastestGrowing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Recent => "recent",
            SortOption::Engaged => "engaged",
            SortOption::Viral => "viral",
            SortOption::FastestGrowing => "fastest_growing",
        }
    }
}

wire_string!(SortOption, "sort option");

/// Publication status of a scheduled post
///
/// The happy path runs draft -> pending_review -> approved -> scheduled ->
/// publishing -> published, or ends in `Failed`. Transitions are owned by
/// the scheduler, not by this type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    PendingReview,
    Approved,
    Scheduled,
    Publishing,
    Published,
    Failed,
}

impl PostStatus {
    pub const ALL: [PostStatus; 7] = [
        PostStatus::Draft,
        PostStatus::PendingReview,
        PostStatus::Approved,
        PostStatus::Scheduled,
        PostStatus::Publishing,
        PostStatus::Published,
        PostStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::PendingReview => "pending_review",
            PostStatus::Approved => "approved",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Publishing => "publishing",
            PostStatus::Published => "published",
            PostStatus::Failed => "failed",
        }
    }
}

wire_string!(PostStatus, "post status");

/// Role of a member inside a workspace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Owner,
    Editor,
    Viewer,
}

impl TeamRole {
    pub const ALL: [TeamRole; 3] = [TeamRole::Owner, TeamRole::Editor, TeamRole::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Owner => "owner",
            TeamRole::Editor => "editor",
            TeamRole::Viewer => "viewer",
        }
    }
}

wire_string!(TeamRole, "team role");

/// Reporting window for analytics views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TimeRange {
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "last_90_days")]
    Last90Days,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
        TimeRange::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "last_7_days",
            TimeRange::Last30Days => "last_30_days",
            TimeRange::Last90Days => "last_90_days",
            TimeRange::Custom => "custom",
        }
    }
}

wire_string!(TimeRange, "time range");

/// Categorical low/medium/high rating
///
/// Used for virality levels, estimated engagement of ideas and the
/// engagement filter of a search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub const ALL: [EngagementLevel; 3] = [
        EngagementLevel::Low,
        EngagementLevel::Medium,
        EngagementLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }
}

wire_string!(EngagementLevel, "engagement level");
