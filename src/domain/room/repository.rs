use async_trait::async_trait;

use super::{CreateRoomDto, Room, RoomFilter, UpdateRoomDto};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, dto: CreateRoomDto) -> DomainResult<Room>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Room>>;

    async fn list(
        &self,
        filter: RoomFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Room>>;

    /// Returns `None` when no room has this id.
    async fn update(&self, id: i32, dto: UpdateRoomDto) -> DomainResult<Option<Room>>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
