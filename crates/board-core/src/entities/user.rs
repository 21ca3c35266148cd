//! User entity

use crate::value_objects::RecordId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl User {
    /// Create a new User
    pub fn new(id: RecordId, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            avatar_url: None,
        }
    }
}
