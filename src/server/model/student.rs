//! Student domain model.

/// A person identified by email address who may join activities.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub email: String,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }
}
