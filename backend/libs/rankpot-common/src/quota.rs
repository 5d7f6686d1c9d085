use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::SubscriptionTier;

/// Usage of one metered resource in the current billing period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub used: u32,
    pub limit: u32,
    pub reset_at: DateTime<Utc>,
}

impl QuotaStatus {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }
}

/// Quotas granted by a subscription tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionLimits {
    pub tier: SubscriptionTier,
    pub searches_per_month: u32,
    pub ai_analyses_per_month: u32,
    pub tracked_accounts: u32,
    pub connected_accounts: u32,
    pub workspaces: u32,
}
