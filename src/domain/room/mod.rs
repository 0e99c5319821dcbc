//! Room aggregate

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreateRoomDto, RoomFilter, UpdateRoomDto};
pub use model::Room;
pub use repository::RoomRepository;
