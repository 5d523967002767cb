use super::*;

/// Tests the sign up / list / unregister round trip.
///
/// Expected: the email appears after signing up and disappears after unregistering
#[tokio::test]
async fn reflects_signup_and_unregister_in_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .name("Art Club")
        .build()
        .await?;

    let service = ActivityService::new(db);

    service.signup(&activity.name, "amelia@mergington.edu").await?;
    let listed = service.get_all().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].participants, vec!["amelia@mergington.edu"]);

    service
        .unregister(&activity.name, "amelia@mergington.edu")
        .await?;
    let listed = service.get_all().await?;
    assert!(listed[0].participants.is_empty());

    Ok(())
}

/// Tests that participants keep the order in which they signed up.
///
/// Expected: emails listed in signup order
#[tokio::test]
async fn lists_participants_in_signup_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;
    // Pre-existing student with a lower id signs up last
    factory::student::create_student_with_email(db, "zoe@mergington.edu").await?;

    let service = ActivityService::new(db);
    service.signup(&activity.name, "adam@mergington.edu").await?;
    service.signup(&activity.name, "bella@mergington.edu").await?;
    service.signup(&activity.name, "zoe@mergington.edu").await?;

    let listed = service.get_all().await?;
    assert_eq!(
        listed[0].participants,
        vec![
            "adam@mergington.edu",
            "bella@mergington.edu",
            "zoe@mergington.edu"
        ]
    );

    Ok(())
}
