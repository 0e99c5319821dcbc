//! Domain layer: entities, validation rules and repository contracts

pub mod repositories;
pub mod reservation;
pub mod room;
pub mod user;

pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationDetails, TimeRange};
pub use room::Room;
pub use user::User;

pub use crate::shared::errors::DomainError;
