/// Error types for the RankPot API service
///
/// Every error is rendered as the shared `ApiError` envelope so clients see
/// one error shape regardless of which handler failed.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use rankpot_common::{ApiError, QuotaStatus};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::ValidationErrors;

/// Result type for api-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request (bad JSON, bad query string)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed request that failed field validation
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Metered resource used up for the current period
    #[error("Quota exceeded: {} of {} used", .0.used, .0.limit)]
    QuotaExceeded(QuotaStatus),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable code placed in `ApiError.errorCode`
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "invalid_request",
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::QuotaExceeded(_) => "quota_exceeded",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        match self {
            // Internal details never reach the client
            AppError::Internal(_) => ApiError::new("Internal server error", self.error_code()),
            AppError::Validation(errors) => ApiError::new(self.to_string(), self.error_code())
                .with_detail_fields(validation_detail(errors)),
            AppError::QuotaExceeded(quota) => {
                let api_error = ApiError::new(self.to_string(), self.error_code());
                match serde_json::to_value(quota) {
                    Ok(Value::Object(fields)) => api_error.with_detail_fields(fields),
                    _ => api_error,
                }
            }
            _ => ApiError::new(self.to_string(), self.error_code()),
        }
    }
}

/// field -> list of failed rule codes
fn validation_detail(errors: &ValidationErrors) -> Map<String, Value> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes = errs
                .iter()
                .map(|e| Value::String(e.code.to_string()))
                .collect();
            (field.to_string(), Value::Array(codes))
        })
        .collect()
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(msg) = self {
            tracing::error!(error = %msg, "internal error while handling request");
        }

        HttpResponse::build(self.status_code()).json(self.to_api_error())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    async fn body_of(err: AppError) -> (StatusCode, ApiError) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn not_found_envelope() {
        let (status, body) = body_of(AppError::NotFound("workspace".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error_code, "not_found");
        assert_eq!(body.error, "Not found: workspace");
        assert!(body.detail.is_none());
    }

    #[actix_web::test]
    async fn internal_message_is_hidden() {
        let (status, body) =
            body_of(AppError::Internal("connection refused at 10.0.0.3".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.error_code, "internal_error");
    }

    #[actix_web::test]
    async fn validation_errors_become_field_detail() {
        let options = rankpot_common::SearchOptions {
            limit: Some(0),
            ..Default::default()
        };
        let errors = options.validate().unwrap_err();

        let (status, body) = body_of(AppError::from(errors)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error_code, "validation_error");
        match body.detail {
            Some(rankpot_common::ApiErrorDetail::Fields(fields)) => {
                assert_eq!(fields["limit"], serde_json::json!(["range"]));
            }
            other => panic!("expected field detail, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn quota_exceeded_carries_quota() {
        let quota = QuotaStatus {
            used: 50,
            limit: 50,
            reset_at: chrono::Utc::now(),
        };

        let (status, body) = body_of(AppError::QuotaExceeded(quota)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.error, "Quota exceeded: 50 of 50 used");
        match body.detail {
            Some(rankpot_common::ApiErrorDetail::Fields(fields)) => {
                assert_eq!(fields["limit"], 50);
                assert!(fields.contains_key("resetAt"));
            }
            other => panic!("expected field detail, got {other:?}"),
        }
    }

    #[test]
    fn anyhow_maps_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
