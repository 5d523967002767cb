//! Signup factory for enrolling students in activities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating signups with a customizable timestamp.
///
/// Both referenced rows must already exist.
pub struct SignupFactory<'a> {
    db: &'a DatabaseConnection,
    activity_id: i32,
    student_id: i32,
    created_at: DateTime<Utc>,
}

impl<'a> SignupFactory<'a> {
    /// Creates a new SignupFactory timestamped with the current time.
    pub fn new(db: &'a DatabaseConnection, activity_id: i32, student_id: i32) -> Self {
        Self {
            db,
            activity_id,
            student_id,
            created_at: Utc::now(),
        }
    }

    /// Sets the enrollment timestamp used for participant ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the signup entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::signup::Model)` - Created signup entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate signup)
    pub async fn build(self) -> Result<entity::signup::Model, DbErr> {
        entity::signup::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            activity_id: ActiveValue::Set(self.activity_id),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Signs a student up for an activity.
///
/// Shorthand for `SignupFactory::new(db, activity_id, student_id).build().await`.
pub async fn create_signup(
    db: &DatabaseConnection,
    activity_id: i32,
    student_id: i32,
) -> Result<entity::signup::Model, DbErr> {
    SignupFactory::new(db, activity_id, student_id).build().await
}
