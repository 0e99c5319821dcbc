pub mod health;
pub mod reservations;
pub mod rooms;
pub mod users;
