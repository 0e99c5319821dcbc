//! User management service

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{CreateUserDto, UpdateUserDto};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, User};
use crate::shared::{PaginatedResult, PaginationParams};

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a user; the email must not belong to anyone else.
    pub async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        if self.repos.users().find_by_email(&dto.email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "User with email {} already exists",
                dto.email
            )));
        }

        let user = self.repos.users().create(dto).await?;
        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    pub async fn list(&self, page: PaginationParams) -> DomainResult<PaginatedResult<User>> {
        self.repos.users().list(page).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> DomainResult<User> {
        let existing = self.get(id).await?;

        if let Some(email) = dto.email.as_deref() {
            if email != existing.email {
                if let Some(other) = self.repos.users().find_by_email(email).await? {
                    if other.id != id {
                        return Err(DomainError::Conflict(format!(
                            "User with email {} already exists",
                            email
                        )));
                    }
                }
            }
        }

        let user = self
            .repos
            .users()
            .update(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete and return the user.
    pub async fn delete(&self, id: i32) -> DomainResult<User> {
        let user = self.get(id).await?;
        self.repos.users().delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(user)
    }
}
