//! Database entities module

pub mod reservation;
pub mod reservation_attendee;
pub mod room;
pub mod user;

pub use reservation::Entity as Reservation;
pub use reservation_attendee::Entity as ReservationAttendee;
pub use room::Entity as Room;
pub use user::Entity as User;
