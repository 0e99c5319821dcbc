/// A bookable meeting room
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    /// Unique display name
    pub name: String,
    pub floor: i32,
    /// Maximum number of people, at least 1
    pub capacity: i32,
    /// Free-form directions, e.g. "next to the elevators"
    pub location: Option<String>,
}
