//! User management API handlers
//!
//! Thin wrappers that delegate to `UserService`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiPath, ApiQuery, ApiResponse, PaginatedResponse, PaginationQuery,
    ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError<UserDto>> {
    let user = state
        .user_service
        .create(request.into())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "User list", body = ApiResponse<PaginatedResponse<UserDto>>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    ApiQuery(page): ApiQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<UserDto>>>, ApiError<PaginatedResponse<UserDto>>> {
    let result = state
        .user_service
        .list(page.params())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        result,
    ))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError<UserDto>> {
    let user = state.user_service.get(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError<UserDto>> {
    let user = state
        .user_service
        .update(id, request.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "User still holds reservations")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError<UserDto>> {
    let user = state.user_service.delete(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(user.into())))
}
