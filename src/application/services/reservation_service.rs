//! Reservation service
//!
//! Owns the booking rules: time ordering, per-room overlap rejection and
//! reserver-only mutation. The overlap check and the write are separate
//! statements, so two concurrent overlapping requests can both pass the
//! check; the database does not enforce exclusion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::reservation::{
    normalize_attendee_ids, NewReservation, ReservationChanges, ReservationFilter,
};
use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Reservation, ReservationDetails, TimeRange,
};
use crate::shared::{PaginatedResult, PaginationParams};

/// Input for booking a room
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reserver_id: i32,
    pub room_id: i32,
    pub attendee_ids: Vec<i32>,
}

/// Partial reservation update issued on behalf of `requesting_user_id`
#[derive(Debug, Clone, Default)]
pub struct UpdateReservation {
    pub requesting_user_id: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub room_id: Option<i32>,
    pub attendee_ids: Option<Vec<i32>>,
}

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, cmd: CreateReservation) -> DomainResult<ReservationDetails> {
        let range = TimeRange::schedule(cmd.start_time, cmd.end_time, Utc::now())?;

        if self.repos.rooms().find_by_id(cmd.room_id).await?.is_none() {
            return Err(DomainError::not_found("Room", cmd.room_id));
        }
        if self.repos.users().find_by_id(cmd.reserver_id).await?.is_none() {
            return Err(DomainError::not_found("User", cmd.reserver_id));
        }

        self.ensure_room_free(cmd.room_id, &range, None).await?;

        let details = self
            .repos
            .reservations()
            .create(NewReservation {
                room_id: cmd.room_id,
                reserver_id: cmd.reserver_id,
                range,
                attendee_ids: normalize_attendee_ids(cmd.attendee_ids),
            })
            .await?;

        info!(
            reservation_id = details.reservation.id,
            room_id = cmd.room_id,
            reserver_id = cmd.reserver_id,
            "Reservation created"
        );
        Ok(details)
    }

    pub async fn list(
        &self,
        filter: ReservationFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<ReservationDetails>> {
        self.repos.reservations().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<ReservationDetails> {
        self.repos
            .reservations()
            .find_details(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }

    pub async fn update(
        &self,
        id: i32,
        cmd: UpdateReservation,
    ) -> DomainResult<ReservationDetails> {
        let existing = self.find(id).await?;
        existing.ensure_owner(cmd.requesting_user_id, "update")?;

        let range = TimeRange::schedule(
            cmd.start_time.unwrap_or(existing.start_time),
            cmd.end_time.unwrap_or(existing.end_time),
            Utc::now(),
        )?;

        let room_id = cmd.room_id.unwrap_or(existing.room_id);
        let room_changed = room_id != existing.room_id;
        if room_changed && self.repos.rooms().find_by_id(room_id).await?.is_none() {
            return Err(DomainError::not_found("Room", room_id));
        }

        let times_changed = cmd.start_time.is_some() || cmd.end_time.is_some();
        if times_changed || room_changed {
            self.ensure_room_free(room_id, &range, Some(id)).await?;
        }

        let details = self
            .repos
            .reservations()
            .update(
                id,
                ReservationChanges {
                    room_id,
                    range,
                    attendee_ids: cmd.attendee_ids.map(normalize_attendee_ids),
                },
            )
            .await?;

        info!(reservation_id = id, "Reservation updated");
        Ok(details)
    }

    /// Delete and return the reservation; only its reserver may do so.
    pub async fn delete(&self, id: i32, requesting_user_id: i32) -> DomainResult<ReservationDetails> {
        let details = self.get(id).await?;
        details
            .reservation
            .ensure_owner(requesting_user_id, "delete")?;

        self.repos.reservations().delete(id).await?;
        info!(reservation_id = id, "Reservation deleted");
        Ok(details)
    }

    async fn find(&self, id: i32) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }

    async fn ensure_room_free(
        &self,
        room_id: i32,
        range: &TimeRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<()> {
        let clash = self
            .repos
            .reservations()
            .find_overlapping(room_id, range, exclude_id)
            .await?;

        match clash {
            Some(other) => {
                warn!(
                    room_id,
                    conflicting_id = other.id,
                    "Rejected overlapping reservation"
                );
                Err(DomainError::Conflict(format!(
                    "Room {} is already reserved from {} to {}",
                    room_id,
                    other.start_time.to_rfc3339(),
                    other.end_time.to_rfc3339()
                )))
            }
            None => Ok(()),
        }
    }
}
