//! Reservation repository interface

use async_trait::async_trait;

use super::model::{
    NewReservation, Reservation, ReservationChanges, ReservationDetails, ReservationFilter,
    TimeRange,
};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert the reservation and its attendee links in one transaction
    async fn create(&self, new: NewReservation) -> DomainResult<ReservationDetails>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Find reservation by ID with room, reserver and attendees loaded
    async fn find_details(&self, id: i32) -> DomainResult<Option<ReservationDetails>>;

    async fn list(
        &self,
        filter: ReservationFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<ReservationDetails>>;

    /// First reservation in `room_id` intersecting `range`, ignoring `exclude_id`
    async fn find_overlapping(
        &self,
        room_id: i32,
        range: &TimeRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<Option<Reservation>>;

    /// Apply changes (and replace attendees when given) in one transaction
    async fn update(&self, id: i32, changes: ReservationChanges)
        -> DomainResult<ReservationDetails>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
