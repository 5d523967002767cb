//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let activity = ActivityFactory::new(&db)
///     .name("Math Club")
///     .max_participants(10)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: i32,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - schedule: `"Mondays, 3:30 PM - 4:30 PM"`
    /// - max_participants: `30`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Activity {}", id),
            description: Some(format!("Description {}", id)),
            schedule: Some("Mondays, 3:30 PM - 4:30 PM".to_string()),
            max_participants: 30,
        }
    }

    /// Sets the unique name for the activity.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the optional description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the optional free-text schedule.
    pub fn schedule(mut self, schedule: Option<String>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the participant capacity.
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            schedule: ActiveValue::Set(self.schedule),
            max_participants: ActiveValue::Set(self.max_participants),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(db).build().await`.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}
