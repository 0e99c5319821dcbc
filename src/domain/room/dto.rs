#[derive(Debug, Clone)]
pub struct CreateRoomDto {
    pub name: String,
    pub floor: i32,
    pub capacity: i32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomDto {
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

/// Optional list filters for rooms
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub floor: Option<i32>,
    pub min_capacity: Option<i32>,
}
