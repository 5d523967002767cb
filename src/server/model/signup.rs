//! Signup domain model.

use chrono::{DateTime, Utc};

/// Enrollment link between one student and one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub student_id: i32,
    pub activity_id: i32,
    /// When the student signed up; defines participant order.
    pub created_at: DateTime<Utc>,
}

impl Signup {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            student_id: entity.student_id,
            activity_id: entity.activity_id,
            created_at: entity.created_at,
        }
    }
}
