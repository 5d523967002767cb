//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails and
/// activity names across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an activity with `count` freshly created students signed up to it.
///
/// Students are signed up in creation order, so the returned vector matches the
/// participant order of the activity.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of students to create and enroll
///
/// # Returns
/// - `Ok((activity, students))` - The activity and its enrolled students
/// - `Err(DbErr)` - Database error during creation
pub async fn create_activity_with_participants(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::activity::Model, Vec<entity::student::Model>), DbErr> {
    let activity = crate::factory::activity::create_activity(db).await?;

    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        let student = crate::factory::student::create_student(db).await?;
        crate::factory::signup::create_signup(db, activity.id, student.id).await?;
        students.push(student);
    }

    Ok((activity, students))
}
