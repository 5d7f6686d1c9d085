/// Wire-contract tests for the RankPot API types
///
/// Payloads below are shaped exactly as the web dashboard sends and
/// receives them.
use rankpot_common::*;
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_account_details_payload() {
    let account_id = Uuid::new_v4();
    let payload = json!({
        "account": {
            "id": account_id,
            "platform": "tiktok",
            "accountName": "dailyfinance",
            "accountUrl": "https://www.tiktok.com/@dailyfinance",
            "followersCount": 250000,
            "connectedAt": "2024-01-15T10:00:00Z"
        },
        "snapshots": [
            {
                "id": Uuid::new_v4(),
                "date": "2024-03-01",
                "followers": 249000,
                "following": 120,
                "postsCount": 412,
                "totalLikes": 3100000,
                "totalComments": 88000,
                "engagementRate": 6.1
            }
        ],
        "optimalTimes": [
            {"dayOfWeek": 2, "hour": 19, "expectedEngagementLift": 0.22}
        ]
    });

    let details: AccountDetails = serde_json::from_value(payload.clone()).unwrap();

    assert_eq!(details.account.id, account_id);
    assert_eq!(details.account.platform, Platform::Tiktok);
    assert_eq!(details.snapshots[0].posts_count, 412);
    assert_eq!(details.optimal_times[0].hour, 19);

    // Serializing gives back the same document
    assert_eq!(serde_json::to_value(&details).unwrap(), payload);
}

#[test]
fn test_dashboard_overview_embeds_content_results() {
    let payload = json!({
        "accounts": [],
        "totalFollowers": 1000,
        "followerGrowth": 3.5,
        "totalEngagement": 420,
        "engagementGrowth": -1.25,
        "topPerformingContent": [
            {
                "platform": "instagram",
                "contentId": "CxYz123",
                "contentUrl": "https://www.instagram.com/p/CxYz123/",
                "thumbnailUrl": "https://cdn.instagram.com/t/CxYz123.jpg",
                "caption": "Weekend in Lisbon",
                "metrics": {
                    "views": 54000,
                    "likes": 4100,
                    "comments": 96,
                    "shares": 310,
                    "engagementRate": 8.32
                },
                "postedAt": "2024-02-20T18:45:00Z",
                "authorUsername": "wanderlust",
                "authorFollowers": 91000,
                "niche": "lifestyle_travel",
                "viralityScore": {
                    "score": 77.0,
                    "level": "high",
                    "factors": {"hook": 0.8, "timing": 0.6}
                }
            }
        ]
    });

    let overview: DashboardOverview = serde_json::from_value(payload).unwrap();
    let top = &overview.top_performing_content[0];

    assert_eq!(top.niche, Some(Niche::LifestyleTravel));
    assert_eq!(top.metrics.shares, 310);
    let score = top.virality_score.as_ref().unwrap();
    assert_eq!(score.level, EngagementLevel::High);
    assert_eq!(score.factors.len(), 2);
}

#[test]
fn test_search_response_against_options() {
    let options: SearchOptions = serde_json::from_value(json!({
        "platforms": ["tiktok"],
        "limit": 1
    }))
    .unwrap();
    assert!(validator::Validate::validate(&options).is_ok());

    let response: SearchResponse = serde_json::from_value(json!({
        "query": "home workout",
        "results": [
            {
                "platform": "tiktok",
                "contentId": "1",
                "contentUrl": "https://www.tiktok.com/@a/video/1",
                "thumbnailUrl": null,
                "caption": "a",
                "metrics": {"views": 1, "likes": 0, "comments": 0, "shares": 0, "engagementRate": 0.0},
                "postedAt": null,
                "authorUsername": null,
                "authorFollowers": null,
                "niche": null,
                "viralityScore": null
            },
            {
                "platform": "tiktok",
                "contentId": "2",
                "contentUrl": "https://www.tiktok.com/@b/video/2",
                "thumbnailUrl": null,
                "caption": "b",
                "metrics": {"views": 2, "likes": 0, "comments": 0, "shares": 0, "engagementRate": 0.0},
                "postedAt": null,
                "authorUsername": null,
                "authorFollowers": null,
                "niche": null,
                "viralityScore": null
            }
        ],
        "totalCount": 2,
        "cached": true
    }))
    .unwrap();

    assert!(!response.respects_limit(&options));
    let response = response.truncate_to(&options);
    assert!(response.respects_limit(&options));
    assert_eq!(response.results[0].content_id, "1");
    assert_eq!(response.total_count, 2);
}

#[test]
fn test_saved_content_derefs_to_content() {
    let content: ContentResult = serde_json::from_value(json!({
        "platform": "instagram",
        "contentId": "C42",
        "contentUrl": "https://www.instagram.com/p/C42/",
        "thumbnailUrl": null,
        "caption": "Crypto basics in 60s",
        "metrics": {"views": 10, "likes": 2, "comments": 1, "shares": 0, "engagementRate": 30.0},
        "postedAt": null,
        "authorUsername": "cryptoclass",
        "authorFollowers": null,
        "niche": "finance_crypto",
        "viralityScore": null
    }))
    .unwrap();

    let saved = SavedContent::new(content.clone(), Uuid::new_v4(), chrono::Utc::now(), None);

    assert_eq!(saved.content_id, "C42");
    assert_eq!(saved.niche, Some(Niche::FinanceCrypto));
    assert_eq!(saved.into_content(), content);
}

#[test]
fn test_workspace_with_members() {
    let owner = Uuid::new_v4();
    let workspace: Workspace = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "name": "Growth Agency",
        "description": null,
        "ownerId": owner,
        "memberCount": 3
    }))
    .unwrap();
    assert_eq!(workspace.owner_id, owner);

    let member: WorkspaceMember = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "userId": owner,
        "role": "owner",
        "email": "lead@agency.io",
        "name": "Lead",
        "joinedAt": "2024-01-01T00:00:00Z",
        "lastActiveAt": "2024-03-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(member.role, TeamRole::Owner);

    let bad_role = json!({
        "id": Uuid::new_v4(),
        "userId": owner,
        "role": "admin",
        "email": "x@agency.io",
        "name": null,
        "joinedAt": "2024-01-01T00:00:00Z",
        "lastActiveAt": null
    });
    assert!(serde_json::from_value::<WorkspaceMember>(bad_role).is_err());
}

#[test]
fn test_api_error_envelope_shapes() {
    let plain: ApiError =
        serde_json::from_value(json!({"error": "Unauthorized", "errorCode": "unauthorized"}))
            .unwrap();
    assert!(plain.detail.is_none());

    let mut fields = serde_json::Map::new();
    fields.insert("used".into(), json!(100));
    fields.insert("limit".into(), json!(100));
    let quota = ApiError::new("Monthly search quota exceeded", "quota_exceeded")
        .with_detail_fields(fields);

    let value = serde_json::to_value(&quota).unwrap();
    assert_eq!(value["detail"]["limit"], 100);
}
