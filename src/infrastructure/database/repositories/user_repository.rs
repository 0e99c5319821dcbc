use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::db_err;
use crate::domain::user::{CreateUserDto, UpdateUserDto, User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, user};
use crate::shared::{PaginatedResult, PaginationParams};

const EMAIL_TAKEN: &str = "A user with this email already exists";

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        debug!("Creating user: {}", dto.email);

        let new_user = user::ActiveModel {
            name: Set(dto.name),
            email: Set(dto.email),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = new_user
            .insert(&self.db)
            .await
            .map_err(|e| db_err(e, EMAIL_TAKEN))?;

        Ok(user_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn list(&self, page: PaginationParams) -> DomainResult<PaginatedResult<User>> {
        let query = user::Entity::find().order_by_asc(user::Column::Id);

        let total = query.clone().count(&self.db).await?;

        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await?;

        let items: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn update(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id).one(&self.db).await?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(user_model_to_domain(existing)));
        }

        let mut active: user::ActiveModel = existing.into();

        if let Some(name) = dto.name {
            active.name = Set(name);
        }
        if let Some(email) = dto.email {
            active.email = Set(email);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| db_err(e, EMAIL_TAKEN))?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let owned = reservation::Entity::find()
            .filter(reservation::Column::ReserverId.eq(id))
            .count(&self.db)
            .await?;
        if owned > 0 {
            return Err(DomainError::Conflict(format!(
                "User {} still holds {} reservation(s)",
                id, owned
            )));
        }

        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_err(e, "User is still referenced by reservations"))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", id));
        }

        Ok(())
    }
}
