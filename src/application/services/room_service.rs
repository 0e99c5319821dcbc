//! Room management service

use std::sync::Arc;

use tracing::info;

use crate::domain::room::{CreateRoomDto, RoomFilter, UpdateRoomDto};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Room};
use crate::shared::{PaginatedResult, PaginationParams};

pub struct RoomService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RoomService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, dto: CreateRoomDto) -> DomainResult<Room> {
        if self.repos.rooms().find_by_name(&dto.name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Room named {} already exists",
                dto.name
            )));
        }

        let room = self.repos.rooms().create(dto).await?;
        info!(room_id = room.id, name = %room.name, "Room created");
        Ok(room)
    }

    pub async fn list(
        &self,
        filter: RoomFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Room>> {
        self.repos.rooms().list(filter, page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", id))
    }

    pub async fn update(&self, id: i32, dto: UpdateRoomDto) -> DomainResult<Room> {
        self.get(id).await?;

        if let Some(name) = dto.name.as_deref() {
            if let Some(other) = self.repos.rooms().find_by_name(name).await? {
                if other.id != id {
                    return Err(DomainError::Conflict(format!(
                        "Room named {} already exists",
                        name
                    )));
                }
            }
        }

        let room = self
            .repos
            .rooms()
            .update(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", id))?;

        info!(room_id = id, "Room updated");
        Ok(room)
    }

    /// Delete and return the room. Rooms with reservations cannot be deleted.
    pub async fn delete(&self, id: i32) -> DomainResult<Room> {
        let room = self.get(id).await?;
        self.repos.rooms().delete(id).await?;
        info!(room_id = id, "Room deleted");
        Ok(room)
    }
}
