use super::*;
use chrono::{Duration, Utc};

/// Tests listing when no activities exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activities = ActivityRepository::new(db)
        .get_all_with_participants()
        .await?;

    assert!(activities.is_empty());

    Ok(())
}

/// Tests that every activity is returned with only its own participants.
///
/// Expected: Ok with activities in id order and participants grouped per activity
#[tokio::test]
async fn groups_participants_by_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (chess, chess_students) =
        factory::helpers::create_activity_with_participants(db, 2).await?;
    let (art, art_students) = factory::helpers::create_activity_with_participants(db, 1).await?;
    let empty = factory::activity::create_activity(db).await?;

    let activities = ActivityRepository::new(db)
        .get_all_with_participants()
        .await?;

    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].activity.id, chess.id);
    assert_eq!(
        activities[0].participants,
        chess_students
            .iter()
            .map(|s| s.email.clone())
            .collect::<Vec<_>>()
    );
    assert_eq!(activities[1].activity.id, art.id);
    assert_eq!(activities[1].participants, vec![art_students[0].email.clone()]);
    assert_eq!(activities[2].activity.id, empty.id);
    assert!(activities[2].participants.is_empty());

    Ok(())
}

/// Tests that participants are listed in insertion order even when the clock steps back.
///
/// Expected: the first inserted signup is listed first despite its later timestamp
#[tokio::test]
async fn orders_participants_by_insertion_not_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;
    let first_student = factory::student::create_student(db).await?;
    let second_student = factory::student::create_student(db).await?;

    let now = Utc::now();
    factory::signup::SignupFactory::new(db, activity.id, first_student.id)
        .created_at(now)
        .build()
        .await?;
    factory::signup::SignupFactory::new(db, activity.id, second_student.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let activities = ActivityRepository::new(db)
        .get_all_with_participants()
        .await?;

    assert_eq!(
        activities[0].participants,
        vec![first_student.email, second_student.email]
    );

    Ok(())
}
