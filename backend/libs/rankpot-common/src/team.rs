//! Team collaboration and client management records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::TeamRole;

/// Team-scoped container for shared accounts and members
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub member_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: TeamRole,
    pub email: String,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub name: Option<String>,
    pub joined_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub last_active_at: Option<DateTime<Utc>>,
}

/// Agency client whose connected accounts are managed in a workspace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "crate::nullable::required")]
    pub notes: Option<String>,
    pub connected_account_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_role_serializes_lowercase() {
        let member = WorkspaceMember {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role: TeamRole::Editor,
            email: "editor@agency.io".to_string(),
            name: None,
            joined_at: Utc::now(),
            last_active_at: None,
        };

        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["role"], "editor");
        assert!(value["name"].is_null());
        assert!(value["lastActiveAt"].is_null());
    }

    #[test]
    fn client_references_accounts_by_id() {
        let account_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let client = Client {
            id: Uuid::new_v4(),
            name: "Acme Fitness".to_string(),
            industry: Some("fitness".to_string()),
            notes: None,
            connected_account_ids: account_ids.clone(),
        };

        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back.connected_account_ids, account_ids);
        assert!(json.contains("connectedAccountIds"));
    }
}
