pub mod services;

pub use services::{
    CreateReservation, ReservationService, RoomService, UpdateReservation, UserService,
};
