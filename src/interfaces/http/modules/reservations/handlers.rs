//! Reservation API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateReservationRequest, DeleteReservationRequest, ListReservationsQuery, ReservationDto,
    UpdateReservationRequest,
};
use crate::application::ReservationService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiPath, ApiQuery, ApiResponse, PaginatedResponse, PaginationQuery,
    ValidatedJson,
};

#[derive(Clone)]
pub struct ReservationHandlerState {
    pub reservation_service: Arc<ReservationService>,
}

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Start in the past, end not after start, or invalid body"),
        (status = 404, description = "Room or reserver not found"),
        (status = 409, description = "Room already reserved in this interval")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationDto>>), ApiError<ReservationDto>> {
    let details = state
        .reservation_service
        .create(request.into())
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(details.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/reservations",
    tag = "Reservations",
    params(PaginationQuery, ListReservationsQuery),
    responses(
        (status = 200, description = "Reservations ordered by start time", body = ApiResponse<PaginatedResponse<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationHandlerState>,
    ApiQuery(page): ApiQuery<PaginationQuery>,
    ApiQuery(filter): ApiQuery<ListReservationsQuery>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<ReservationDto>>>,
    ApiError<PaginatedResponse<ReservationDto>>,
> {
    let result = state
        .reservation_service
        .list(filter.into(), page.params())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        result,
    ))))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError<ReservationDto>> {
    let details = state
        .reservation_service
        .get(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    patch,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid time range or body"),
        (status = 403, description = "Requesting user is not the reserver"),
        (status = 404, description = "Reservation or room not found"),
        (status = 409, description = "Room already reserved in this interval")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError<ReservationDto>> {
    let details = state
        .reservation_service
        .update(id, request.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = DeleteReservationRequest,
    responses(
        (status = 200, description = "Deleted reservation", body = ApiResponse<ReservationDto>),
        (status = 403, description = "Requesting user is not the reserver"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<DeleteReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError<ReservationDto>> {
    let details = state
        .reservation_service
        .delete(id, request.requesting_user_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(details.into())))
}
