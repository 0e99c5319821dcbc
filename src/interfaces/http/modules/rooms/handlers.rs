//! Room management API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateRoomRequest, ListRoomsQuery, RoomDto, UpdateRoomRequest};
use crate::application::RoomService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiPath, ApiQuery, ApiResponse, PaginatedResponse, PaginationQuery,
    ValidatedJson,
};

#[derive(Clone)]
pub struct RoomHandlerState {
    pub room_service: Arc<RoomService>,
}

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "Rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Room name already in use")
    )
)]
pub async fn create_room(
    State(state): State<RoomHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), ApiError<RoomDto>> {
    let room = state
        .room_service
        .create(request.into())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(room.into()))))
}

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "Rooms",
    params(PaginationQuery, ListRoomsQuery),
    responses(
        (status = 200, description = "Room list", body = ApiResponse<PaginatedResponse<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(state): State<RoomHandlerState>,
    ApiQuery(page): ApiQuery<PaginationQuery>,
    ApiQuery(filter): ApiQuery<ListRoomsQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<RoomDto>>>, ApiError<PaginatedResponse<RoomDto>>> {
    let result = state
        .room_service
        .list(filter.into(), page.params())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        result,
    ))))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<RoomHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError<RoomDto>> {
    let room = state.room_service.get(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    patch,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Room name already in use")
    )
)]
pub async fn update_room(
    State(state): State<RoomHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError<RoomDto>> {
    let room = state
        .room_service
        .update(id, request.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deleted room", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Room still has reservations")
    )
)]
pub async fn delete_room(
    State(state): State<RoomHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<RoomDto>>, ApiError<RoomDto>> {
    let room = state.room_service.delete(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(room.into())))
}
