use chrono::{DateTime, Utc};

/// A person who can reserve rooms or attend reservations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
