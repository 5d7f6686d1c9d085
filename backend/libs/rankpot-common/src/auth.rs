use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::SubscriptionTier;

/// Authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub subscription_tier: SubscriptionTier,
}

/// Result of a successful login or token refresh
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: Uuid,
    pub email: String,
    pub subscription_tier: SubscriptionTier,
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl AuthResponse {
    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            email: self.email.clone(),
            subscription_tier: self.subscription_tier,
        }
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("subscription_tier", &self.subscription_tier)
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
