//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::room::{CreateRoomDto, RoomFilter, UpdateRoomDto};
use crate::domain::Room;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub floor: i32,
    pub capacity: i32,
    pub location: Option<String>,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            floor: r.floor,
            capacity: r.capacity,
            location: r.location,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Aurora")]
    pub name: String,
    #[schema(example = 3)]
    pub floor: i32,
    #[validate(range(min = 1))]
    #[schema(example = 8)]
    pub capacity: i32,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

impl From<CreateRoomRequest> for CreateRoomDto {
    fn from(r: CreateRoomRequest) -> Self {
        Self {
            name: r.name,
            floor: r.floor,
            capacity: r.capacity,
            location: r.location,
        }
    }
}

/// Partial room update; omitted fields keep their value
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub floor: Option<i32>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

impl From<UpdateRoomRequest> for UpdateRoomDto {
    fn from(r: UpdateRoomRequest) -> Self {
        Self {
            name: r.name,
            floor: r.floor,
            capacity: r.capacity,
            location: r.location,
        }
    }
}

/// Room list filters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListRoomsQuery {
    /// Only rooms on this floor
    pub floor: Option<i32>,
    /// Only rooms holding at least this many people
    pub min_capacity: Option<i32>,
}

impl From<ListRoomsQuery> for RoomFilter {
    fn from(q: ListRoomsQuery) -> Self {
        Self {
            floor: q.floor,
            min_capacity: q.min_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_must_be_positive() {
        let req: CreateRoomRequest =
            serde_json::from_value(serde_json::json!({"name": "Aurora", "floor": 1, "capacity": 0}))
                .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn location_is_optional() {
        let req: CreateRoomRequest =
            serde_json::from_value(serde_json::json!({"name": "Aurora", "floor": -1, "capacity": 4}))
                .unwrap();
        assert!(req.validate().is_ok());
        assert!(req.location.is_none());
    }
}
