//! Activity fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating activity entity models without database insertion.

use entity::activity;

/// Default test activity name.
pub const DEFAULT_NAME: &str = "Chess Club";

/// Default test activity description.
pub const DEFAULT_DESCRIPTION: &str = "Learn strategies and compete in chess tournaments";

/// Default test activity schedule.
pub const DEFAULT_SCHEDULE: &str = "Fridays, 3:30 PM - 5:00 PM";

/// Default participant capacity.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 12;

/// Creates an activity entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Chess Club"`
/// - description: `Some("Learn strategies and compete in chess tournaments")`
/// - schedule: `Some("Fridays, 3:30 PM - 5:00 PM")`
/// - max_participants: `12`
///
/// # Example
///
/// ```rust,ignore
/// let activity = fixture::activity::entity();
/// assert_eq!(activity.name, "Chess Club");
/// ```
pub fn entity() -> activity::Model {
    entity_builder().build()
}

/// Creates an activity entity builder for customization.
pub fn entity_builder() -> ActivityEntityBuilder {
    ActivityEntityBuilder::default()
}

/// Builder for creating customized activity entity models.
pub struct ActivityEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: i32,
}

impl Default for ActivityEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            schedule: Some(DEFAULT_SCHEDULE.to_string()),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl ActivityEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn schedule(mut self, schedule: Option<String>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Builds the activity entity model.
    pub fn build(self) -> activity::Model {
        activity::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
        }
    }
}
