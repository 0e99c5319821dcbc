//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{CreateUserDto, UpdateUserDto};
use crate::domain::User;

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Alice Kim")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

/// Partial user update; omitted fields keep their value
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_validates_email() {
        let ok: CreateUserRequest =
            serde_json::from_value(serde_json::json!({"name": "Alice", "email": "a@b.io"}))
                .unwrap();
        assert!(ok.validate().is_ok());

        let bad: CreateUserRequest =
            serde_json::from_value(serde_json::json!({"name": "Alice", "email": "nope"}))
                .unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn create_request_rejects_unknown_fields() {
        let res: Result<CreateUserRequest, _> = serde_json::from_value(
            serde_json::json!({"name": "Alice", "email": "a@b.io", "role": "admin"}),
        );
        assert!(res.is_err());
    }

    #[test]
    fn user_dto_is_camel_case() {
        let dto = UserDto {
            id: 1,
            name: "Alice".into(),
            email: "a@b.io".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("createdAt").is_some());
    }
}
