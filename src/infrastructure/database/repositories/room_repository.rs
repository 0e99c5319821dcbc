//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::db_err;
use crate::domain::room::{CreateRoomDto, Room, RoomFilter, RoomRepository, UpdateRoomDto};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, room};
use crate::shared::{PaginatedResult, PaginationParams};

const NAME_TAKEN: &str = "A room with this name already exists";

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn room_model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.name,
        floor: m.floor,
        capacity: m.capacity,
        location: m.location,
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, dto: CreateRoomDto) -> DomainResult<Room> {
        debug!("Creating room: {}", dto.name);

        let model = room::ActiveModel {
            name: Set(dto.name),
            floor: Set(dto.floor),
            capacity: Set(dto.capacity),
            location: Set(dto.location),
            ..Default::default()
        };
        let model = model
            .insert(&self.db)
            .await
            .map_err(|e| db_err(e, NAME_TAKEN))?;
        Ok(room_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(room_model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Room>> {
        let model = room::Entity::find()
            .filter(room::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(room_model_to_domain))
    }

    async fn list(
        &self,
        filter: RoomFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<Room>> {
        let mut query = room::Entity::find();

        if let Some(floor) = filter.floor {
            query = query.filter(room::Column::Floor.eq(floor));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(room::Column::Capacity.gte(min_capacity));
        }

        let query = query.order_by_asc(room::Column::Id);
        let total = query.clone().count(&self.db).await?;
        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await?;

        Ok(PaginatedResult::new(
            models.into_iter().map(room_model_to_domain).collect(),
            total,
            page.page,
            page.limit,
        ))
    }

    async fn update(&self, id: i32, dto: UpdateRoomDto) -> DomainResult<Option<Room>> {
        let Some(existing) = room::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: room::ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(name) = dto.name {
            active.name = Set(name);
            changed = true;
        }
        if let Some(floor) = dto.floor {
            active.floor = Set(floor);
            changed = true;
        }
        if let Some(capacity) = dto.capacity {
            active.capacity = Set(capacity);
            changed = true;
        }
        if let Some(location) = dto.location {
            active.location = Set(Some(location));
            changed = true;
        }

        if !changed {
            return Ok(Some(room_model_to_domain(existing)));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| db_err(e, NAME_TAKEN))?;
        Ok(Some(room_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let booked = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(id))
            .count(&self.db)
            .await?;
        if booked > 0 {
            return Err(DomainError::Conflict(format!(
                "Room {} still has {} reservation(s)",
                id, booked
            )));
        }

        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_err(e, "Room is still referenced by reservations"))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Room", id));
        }
        Ok(())
    }
}
