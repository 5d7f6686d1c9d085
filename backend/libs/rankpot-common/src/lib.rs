//! RankPot Common Library
//!
//! The typed API contract shared by the RankPot backend and its clients.
//! Every record serializes to the camelCase JSON shape the web dashboard
//! consumes: string timestamps, explicit `null` for nullable fields.

pub mod accounts;
pub mod ai;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod enums;
pub mod error;
pub mod notification;
mod nullable;
pub mod quota;
pub mod scheduling;
pub mod search;
pub mod team;

pub use accounts::{ConnectedAccount, TrackedAccount, TrackedContent};
pub use ai::{AiAnalysis, ContentIdea, GeneratedCaption};
pub use auth::{AuthResponse, User};
pub use content::{ContentMetrics, ContentResult, SavedContent, ViralityScore};
pub use dashboard::{AccountDetails, AnalyticsSnapshot, DashboardOverview, OptimalTime};
pub use enums::{
    EngagementLevel, Niche, ParseEnumError, Platform, PostStatus, SortOption, SubscriptionTier,
    TeamRole, TimeRange,
};
pub use error::{ApiError, ApiErrorDetail};
pub use notification::Notification;
pub use quota::{QuotaStatus, SubscriptionLimits};
pub use scheduling::ScheduledPost;
pub use search::{SearchOptions, SearchResponse};
pub use team::{Client, Workspace, WorkspaceMember};
