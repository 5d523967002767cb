use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, signup::SignupRepository, student::StudentRepository},
    error::AppError,
    model::activity::{Activity, ActivityWithParticipants},
};

const ACTIVITY_NOT_FOUND: &str = "Activity not found";
const ALREADY_SIGNED_UP: &str = "Student is already signed up";
const ACTIVITY_FULL: &str = "Activity is full";
const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all activities with their participants' emails
    pub async fn get_all(&self) -> Result<Vec<ActivityWithParticipants>, AppError> {
        let activities = ActivityRepository::new(self.db)
            .get_all_with_participants()
            .await?;

        Ok(activities)
    }

    /// Signs a student up for an activity, creating the student on first reference.
    ///
    /// Runs in a single transaction. Any error drops the transaction, rolling back a
    /// student row created along the way. After inserting, the signup count is checked
    /// again inside the transaction so a concurrent signup cannot push the activity past
    /// its capacity.
    ///
    /// # Arguments
    /// - `activity_name`: Exact name of the activity
    /// - `email`: Student email, not validated
    ///
    /// # Returns
    /// - `Ok(())`: Student enrolled
    /// - `Err(AppError::NotFound)`: No activity with that name
    /// - `Err(AppError::BadRequest)`: Student already enrolled
    /// - `Err(AppError::Conflict)`: Activity at capacity
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let activity = ActivityRepository::new(&txn)
            .find_by_name(activity_name)
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;

        let student = StudentRepository::new(&txn).find_or_create(email).await?;

        let signup_repo = SignupRepository::new(&txn);

        if signup_repo.find(activity.id, student.id).await?.is_some() {
            return Err(AppError::BadRequest(ALREADY_SIGNED_UP.to_string()));
        }

        if activity.is_full(signup_repo.count_by_activity(activity.id).await?) {
            return Err(AppError::Conflict(ACTIVITY_FULL.to_string()));
        }

        enroll_within_capacity(&txn, &activity, student.id).await?;

        txn.commit().await?;

        tracing::info!("Signed up {} for {}", email, activity_name);

        Ok(())
    }

    /// Removes a student from an activity.
    ///
    /// Student and activity rows are never deleted.
    ///
    /// # Returns
    /// - `Ok(())`: Signup deleted
    /// - `Err(AppError::NotFound)`: No activity with that name
    /// - `Err(AppError::BadRequest)`: Unknown student or student not enrolled
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let activity = ActivityRepository::new(&txn)
            .find_by_name(activity_name)
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;

        let student = StudentRepository::new(&txn)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::BadRequest(NOT_SIGNED_UP.to_string()))?;

        let deleted = SignupRepository::new(&txn)
            .delete(activity.id, student.id)
            .await?;

        if !deleted {
            return Err(AppError::BadRequest(NOT_SIGNED_UP.to_string()));
        }

        txn.commit().await?;

        tracing::info!("Unregistered {} from {}", email, activity_name);

        Ok(())
    }
}

/// Inserts the signup, then re-counts to catch a concurrent signup that took the last seat.
///
/// The caller owns the transaction and must drop it on error so the insert is undone.
async fn enroll_within_capacity<C: ConnectionTrait>(
    conn: &C,
    activity: &Activity,
    student_id: i32,
) -> Result<(), AppError> {
    let signup_repo = SignupRepository::new(conn);

    signup_repo
        .create(activity.id, student_id)
        .await
        .map_err(map_duplicate_signup)?;

    if activity.is_over_capacity(signup_repo.count_by_activity(activity.id).await?) {
        tracing::warn!(
            "Rolling back signup of student {} for {}: capacity exceeded by concurrent signup",
            student_id,
            activity.name
        );
        return Err(AppError::Conflict(ACTIVITY_FULL.to_string()));
    }

    Ok(())
}

/// Reports a primary key violation on insert as an ordinary duplicate signup.
fn map_duplicate_signup(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(ALREADY_SIGNED_UP.to_string())
        }
        _ => AppError::DbErr(err),
    }
}
