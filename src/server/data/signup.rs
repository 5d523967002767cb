//! Signup data repository for database operations.
//!
//! Manages the enrollment rows linking students to activities.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::signup::Signup;

/// Repository providing database operations for signups.
pub struct SignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SignupRepository<'a, C> {
    /// Creates a new SignupRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the signup linking a student to an activity.
    ///
    /// # Returns
    /// - `Ok(Some(Signup))` - The student is enrolled
    /// - `Ok(None)` - The student is not enrolled
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, activity_id: i32, student_id: i32) -> Result<Option<Signup>, DbErr> {
        let entity = entity::prelude::Signup::find()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .filter(entity::signup::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Signup::from_entity))
    }

    /// Enrolls a student in an activity, timestamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Signup)` - The created signup
    /// - `Err(DbErr)` - Database error, including a primary key violation when the
    ///   student is already enrolled
    pub async fn create(&self, activity_id: i32, student_id: i32) -> Result<Signup, DbErr> {
        let entity = entity::signup::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            activity_id: ActiveValue::Set(activity_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(entity))
    }

    /// Removes the signup linking a student to an activity.
    ///
    /// # Returns
    /// - `Ok(true)` - Signup deleted
    /// - `Ok(false)` - No such signup existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, activity_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .filter(entity::signup::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the students enrolled in an activity.
    pub async fn count_by_activity(&self, activity_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Signup::find()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .count(self.db)
            .await
    }
}
