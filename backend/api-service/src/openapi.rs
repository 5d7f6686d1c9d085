/// OpenAPI documentation for the RankPot API
use rankpot_common::{
    AccountDetails, AiAnalysis, AnalyticsSnapshot, ApiError, AuthResponse, Client,
    ConnectedAccount, ContentIdea, ContentMetrics, ContentResult, DashboardOverview,
    EngagementLevel, GeneratedCaption, Niche, Notification, OptimalTime, Platform, PostStatus,
    QuotaStatus, SavedContent, ScheduledPost, SearchOptions, SearchResponse, SortOption,
    SubscriptionLimits, SubscriptionTier, TeamRole, TimeRange, TrackedAccount, TrackedContent,
    User, ViralityScore, Workspace, WorkspaceMember,
};
use utoipa::OpenApi;

use crate::handlers::meta::{HealthResponse, RootResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RankPot API",
        description = "Social Media Intelligence Platform API. Every error response, including unknown routes (404), carries an `ApiError` body.",
        license(name = "MIT")
    ),
    paths(crate::handlers::meta::root, crate::handlers::meta::health),
    components(schemas(
        RootResponse,
        HealthResponse,
        ApiError,
        ContentMetrics,
        ViralityScore,
        ContentResult,
        SavedContent,
        AiAnalysis,
        ContentIdea,
        GeneratedCaption,
        ConnectedAccount,
        TrackedAccount,
        TrackedContent,
        ScheduledPost,
        Workspace,
        WorkspaceMember,
        Client,
        Notification,
        User,
        AuthResponse,
        DashboardOverview,
        AnalyticsSnapshot,
        OptimalTime,
        AccountDetails,
        SearchOptions,
        SearchResponse,
        QuotaStatus,
        SubscriptionLimits,
        Platform,
        Niche,
        SubscriptionTier,
        SortOption,
        PostStatus,
        TeamRole,
        TimeRange,
        EngagementLevel,
    )),
    tags(
        (name = "meta", description = "Service information"),
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }

    pub fn docs_path() -> &'static str {
        "/docs"
    }

    pub fn redoc_path() -> &'static str {
        "/redoc"
    }
}
