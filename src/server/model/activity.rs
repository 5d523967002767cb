//! Activity domain models and parameters.
//!
//! Provides the activity domain model, the aggregate of an activity with its enrolled
//! participants returned by listing, and the parameter type used when seeding new
//! activities.

use crate::model::activity::ActivityDto;

/// An extracurricular offering with a participant capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Surrogate primary key.
    pub id: i32,
    /// Unique name, used as the natural key by all lookups.
    pub name: String,
    pub description: Option<String>,
    /// Free-text schedule such as "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: Option<String>,
    pub max_participants: i32,
}

impl Activity {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            schedule: entity.schedule,
            max_participants: entity.max_participants,
        }
    }

    /// Returns whether `signup_count` enrollments leave no room for another student.
    ///
    /// A negative capacity is treated as zero.
    pub fn is_full(&self, signup_count: u64) -> bool {
        signup_count >= self.capacity()
    }

    /// Returns whether `signup_count` enrollments exceed the capacity.
    pub fn is_over_capacity(&self, signup_count: u64) -> bool {
        signup_count > self.capacity()
    }

    fn capacity(&self) -> u64 {
        u64::try_from(self.max_participants).unwrap_or(0)
    }
}

/// An activity together with the emails of its enrolled students.
///
/// Participants are ordered by the time they signed up.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityWithParticipants {
    pub activity: Activity,
    pub participants: Vec<String>,
}

impl ActivityWithParticipants {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            name: self.activity.name,
            description: self.activity.description,
            schedule: self.activity.schedule,
            max_participants: self.activity.max_participants,
            participants: self.participants,
        }
    }
}

/// Parameters for inserting a new activity.
#[derive(Debug, Clone)]
pub struct CreateActivityParam {
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i32,
}
