use super::*;

/// Tests creating an activity with every field set.
///
/// Expected: Ok with the activity persisted
#[tokio::test]
async fn creates_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    let activity = repo
        .create(CreateActivityParam {
            name: "Chess Club".to_string(),
            description: Some("Learn strategies and compete in chess tournaments".to_string()),
            schedule: Some("Fridays, 3:30 PM - 5:00 PM".to_string()),
            max_participants: 12,
        })
        .await?;

    assert_eq!(activity.name, "Chess Club");
    assert_eq!(activity.max_participants, 12);

    let db_activity = entity::prelude::Activity::find_by_id(activity.id)
        .one(db)
        .await?;
    assert!(db_activity.is_some());

    Ok(())
}

/// Tests creating an activity without description or schedule.
///
/// Expected: Ok with both optional fields stored as None
#[tokio::test]
async fn creates_activity_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = ActivityRepository::new(db)
        .create(CreateActivityParam {
            name: "Study Hall".to_string(),
            description: None,
            schedule: None,
            max_participants: 30,
        })
        .await?;

    assert!(activity.description.is_none());
    assert!(activity.schedule.is_none());

    Ok(())
}

/// Tests that activity names are unique.
///
/// Expected: Err on the second insert and only one row stored
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::ActivityFactory::new(db)
        .name("Chess Club")
        .build()
        .await?;

    let result = ActivityRepository::new(db)
        .create(CreateActivityParam {
            name: "Chess Club".to_string(),
            description: None,
            schedule: None,
            max_participants: 5,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);

    Ok(())
}
