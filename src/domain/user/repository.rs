use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn list(&self, page: PaginationParams) -> DomainResult<PaginatedResult<User>>;

    /// Returns `None` when no user has this id.
    async fn update(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
