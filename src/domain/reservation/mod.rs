//! Reservation aggregate
//!
//! Contains the Reservation entity, the time-range rules, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{
    normalize_attendee_ids, NewReservation, Reservation, ReservationChanges,
    ReservationDetails, ReservationFilter, TimeRange,
};
pub use repository::ReservationRepository;
