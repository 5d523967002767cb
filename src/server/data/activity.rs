//! Activity data repository for database operations.
//!
//! Provides the `ActivityRepository` for creating and querying activities, including the
//! aggregate load of every activity with its enrolled students.

use std::collections::HashMap;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::activity::{Activity, ActivityWithParticipants, CreateActivityParam};

/// Repository providing database operations for activities.
///
/// Generic over the connection so the same queries run against the pool or inside an
/// open transaction.
pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    /// Creates a new ActivityRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new activity.
    ///
    /// # Arguments
    /// - `param` - Name, description, schedule and capacity of the activity
    ///
    /// # Returns
    /// - `Ok(Activity)` - The created activity
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, param: CreateActivityParam) -> Result<Activity, DbErr> {
        let entity = entity::activity::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            schedule: ActiveValue::Set(param.schedule),
            max_participants: ActiveValue::Set(param.max_participants),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    /// Finds an activity by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Activity found
    /// - `Ok(None)` - No activity with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::Activity::find()
            .filter(entity::activity::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Checks whether at least one activity exists.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let first = entity::prelude::Activity::find().one(self.db).await?;

        Ok(first.is_some())
    }

    /// Gets every activity with the emails of its enrolled students.
    ///
    /// Runs two queries regardless of the number of activities: one for the activities
    /// and one for all signups joined with their students. Activities are ordered by id
    /// and participants by insertion order of their signup row (Sqlite `rowid`), which
    /// unlike `created_at` does not depend on the wall clock.
    ///
    /// # Returns
    /// - `Ok(Vec<ActivityWithParticipants>)` - All activities, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_participants(&self) -> Result<Vec<ActivityWithParticipants>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        let signups = entity::prelude::Signup::find()
            .find_also_related(entity::prelude::Student)
            .order_by_asc(Expr::cust("signup.rowid"))
            .all(self.db)
            .await?;

        let mut participants: HashMap<i32, Vec<String>> = HashMap::new();
        for (signup, student) in signups {
            if let Some(student) = student {
                participants
                    .entry(signup.activity_id)
                    .or_default()
                    .push(student.email);
            }
        }

        Ok(activities
            .into_iter()
            .map(|activity| ActivityWithParticipants {
                participants: participants.remove(&activity.id).unwrap_or_default(),
                activity: Activity::from_entity(activity),
            })
            .collect())
    }
}
