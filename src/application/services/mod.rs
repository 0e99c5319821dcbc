//! Application services
//!
//! Each service orchestrates one resource's use-cases on top of the
//! repository traits. HTTP handlers are thin wrappers that delegate here.

mod reservation_service;
mod room_service;
mod user_service;

pub use reservation_service::{CreateReservation, ReservationService, UpdateReservation};
pub use room_service::RoomService;
pub use user_service::UserService;
