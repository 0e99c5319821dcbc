//! Reservations module: booking, rescheduling and cancelling rooms

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
