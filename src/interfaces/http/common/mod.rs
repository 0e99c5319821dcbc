//! Response envelope, pagination and error mapping shared by all modules

mod extract;

pub use extract::{ApiPath, ApiQuery, BadRequest, ValidatedJson};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::DomainError;
use crate::shared::{PaginatedResult, PaginationParams};

/// Standard API response wrapper
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One page of a list endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Matching rows across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<S>(result: PaginatedResult<S>) -> Self
    where
        T: From<S>,
    {
        Self {
            items: result.items.into_iter().map(T::from).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
        }
    }
}

/// `page` / `limit` query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number starting at 1 (default 1)
    pub page: Option<u32>,
    /// Items per page, 1 to 100 (default 50)
    pub limit: Option<u32>,
}

impl PaginationQuery {
    pub fn params(&self) -> PaginationParams {
        PaginationParams::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(PaginationParams::DEFAULT_LIMIT),
        )
    }
}

/// Error half of every handler result
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error onto its status code and error envelope.
pub fn domain_error<T>(e: DomainError) -> ApiError<T> {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!(error = %e, "Request failed");
    }
    (status, Json(ApiResponse::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        assert_eq!(status_for(&DomainError::not_found("Room", 1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Conflict("taken".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::Forbidden("no".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&DomainError::Storage("io".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_envelope_has_null_data() {
        let (_, Json(body)) = domain_error::<()>(DomainError::Conflict("room booked".into()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "Conflict: room booked");
    }

    #[test]
    fn pagination_query_defaults_and_clamps() {
        let q = PaginationQuery {
            page: None,
            limit: None,
        };
        let p = q.params();
        assert_eq!((p.page, p.limit), (1, 50));

        let q = PaginationQuery {
            page: Some(0),
            limit: Some(500),
        };
        let p = q.params();
        assert_eq!((p.page, p.limit), (1, 100));
    }

    #[test]
    fn paginated_response_uses_camel_case() {
        let result = PaginatedResult::new(vec![1i64, 2], 2, 1, 50);
        let resp: PaginatedResponse<i64> = PaginatedResponse::from_result(result);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
