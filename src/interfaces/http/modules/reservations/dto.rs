//! Reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::{CreateReservation, UpdateReservation};
use crate::domain::reservation::ReservationFilter;
use crate::domain::ReservationDetails;
use crate::interfaces::http::modules::rooms::RoomDto;
use crate::interfaces::http::modules::users::UserDto;

/// Reservation with its room, reserver and attendees embedded
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub room: RoomDto,
    pub reserver: UserDto,
    pub attendees: Vec<UserDto>,
}

impl From<ReservationDetails> for ReservationDto {
    fn from(d: ReservationDetails) -> Self {
        Self {
            id: d.reservation.id,
            start_time: d.reservation.start_time,
            end_time: d.reservation.end_time,
            created_at: d.reservation.created_at,
            room: d.room.into(),
            reserver: d.reserver.into(),
            attendees: d.attendees.into_iter().map(UserDto::from).collect(),
        }
    }
}

/// Book a room. Times are RFC 3339; sub-second precision is dropped.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReservationRequest {
    #[schema(example = "2030-07-10T10:00:00Z")]
    pub start_time: DateTime<Utc>,
    #[schema(example = "2030-07-10T11:00:00Z")]
    pub end_time: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub reserver_id: i32,
    #[validate(range(min = 1))]
    pub room_id: i32,
    /// Users invited to the meeting; unknown ids are ignored
    #[serde(default)]
    pub attendee_ids: Vec<i32>,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(r: CreateReservationRequest) -> Self {
        Self {
            start_time: r.start_time,
            end_time: r.end_time,
            reserver_id: r.reserver_id,
            room_id: r.room_id,
            attendee_ids: r.attendee_ids,
        }
    }
}

/// Reschedule or move a reservation. Only its reserver may do so.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateReservationRequest {
    #[validate(range(min = 1))]
    pub requesting_user_id: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[validate(range(min = 1))]
    pub room_id: Option<i32>,
    /// Replaces the attendee set when present
    pub attendee_ids: Option<Vec<i32>>,
}

impl From<UpdateReservationRequest> for UpdateReservation {
    fn from(r: UpdateReservationRequest) -> Self {
        Self {
            requesting_user_id: r.requesting_user_id,
            start_time: r.start_time,
            end_time: r.end_time,
            room_id: r.room_id,
            attendee_ids: r.attendee_ids,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteReservationRequest {
    #[validate(range(min = 1))]
    pub requesting_user_id: i32,
}

/// Reservation list filters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListReservationsQuery {
    pub room_id: Option<i32>,
    pub reserver_id: Option<i32>,
    /// Only reservations ending after this instant
    pub from: Option<DateTime<Utc>>,
    /// Only reservations starting before this instant
    pub to: Option<DateTime<Utc>>,
}

impl From<ListReservationsQuery> for ReservationFilter {
    fn from(q: ListReservationsQuery) -> Self {
        Self {
            room_id: q.room_id,
            reserver_id: q.reserver_id,
            from: q.from,
            to: q.to,
        }
    }
}
