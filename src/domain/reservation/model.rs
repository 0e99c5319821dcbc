//! Reservation domain entity

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::room::Room;
use crate::domain::user::User;
use crate::shared::DomainError;

/// Half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range for a new or rescheduled reservation.
    ///
    /// Both bounds are truncated to whole seconds. A start before `now` is
    /// rejected first, then an end that is not strictly after the start.
    pub fn schedule(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let start = start.trunc_subsecs(0);
        let end = end.trunc_subsecs(0);

        if start < now.trunc_subsecs(0) {
            return Err(DomainError::Validation(
                "Reservation start time must not be in the past".into(),
            ));
        }
        if end <= start {
            return Err(DomainError::Validation(
                "Reservation end time must be after its start time".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Wrap bounds already known to be ordered (e.g. loaded from storage).
    pub(crate) fn from_stored(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// `self.start < other.end && self.end > other.start`
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A booking of a room by one user over a time interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    /// User who made (and owns) the reservation
    pub reserver_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn time_range(&self) -> TimeRange {
        TimeRange::from_stored(self.start_time, self.end_time)
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.reserver_id == user_id
    }

    /// Fail with `Forbidden` unless `user_id` is the reserver.
    pub fn ensure_owner(&self, user_id: i32, action: &str) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "User {} may not {} reservation {}",
                user_id, action, self.id
            )))
        }
    }
}

/// Reservation with its room, reserver and attendees resolved
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub room: Room,
    pub reserver: User,
    pub attendees: Vec<User>,
}

/// Validated input for inserting a reservation
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub room_id: i32,
    pub reserver_id: i32,
    pub range: TimeRange,
    pub attendee_ids: Vec<i32>,
}

/// Effective values for an update; `attendee_ids: None` keeps the current set.
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub room_id: i32,
    pub range: TimeRange,
    pub attendee_ids: Option<Vec<i32>>,
}

/// Optional list filters; `from`/`to` select reservations intersecting the window.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub room_id: Option<i32>,
    pub reserver_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Sorted, de-duplicated attendee ids.
pub fn normalize_attendee_ids(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

// ── Tests ──────────────────────────────────────────────────────
