use super::*;

/// Tests signing up a new student.
///
/// Expected: Ok with the student created and enrolled
#[tokio::test]
async fn signs_up_new_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;

    ActivityService::new(db)
        .signup(&activity.name, "test@mergington.edu")
        .await?;

    let student = entity::prelude::Student::find()
        .filter(entity::student::Column::Email.eq("test@mergington.edu"))
        .one(db)
        .await?;
    assert!(student.is_some());
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}

/// Tests signing up an existing student reuses the student row.
///
/// Expected: Ok with no additional student created
#[tokio::test]
async fn reuses_existing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, students) = factory::helpers::create_activity_with_participants(db, 1).await?;
    let other = factory::activity::create_activity(db).await?;

    ActivityService::new(db)
        .signup(&other.name, &students[0].email)
        .await?;

    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 2);

    Ok(())
}

/// Tests signing up for an unknown activity.
///
/// Expected: Err(NotFound) and no student created
#[tokio::test]
async fn fails_for_unknown_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ActivityService::new(db)
        .signup("Underwater Basket Weaving", "test@mergington.edu")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests signing up the same student twice.
///
/// Expected: Err(BadRequest) on the second call with a single signup stored
#[tokio::test]
async fn fails_when_already_signed_up() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;
    let service = ActivityService::new(db);

    service.signup(&activity.name, "mia@mergington.edu").await?;
    let result = service.signup(&activity.name, "mia@mergington.edu").await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("already signed up")),
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}

/// Tests filling an activity to capacity and attempting one more signup.
///
/// Expected: first 12 succeed, the 13th fails with Conflict
#[tokio::test]
async fn fails_when_activity_is_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .max_participants(12)
        .build()
        .await?;
    let service = ActivityService::new(db);

    for i in 0..12 {
        service
            .signup(&activity.name, &format!("student{}@mergington.edu", i))
            .await?;
    }

    let result = service
        .signup(&activity.name, "latecomer@mergington.edu")
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let count = entity::prelude::Signup::find()
        .filter(entity::signup::Column::ActivityId.eq(activity.id))
        .count(db)
        .await?;
    assert_eq!(count, 12);

    Ok(())
}

/// Tests that a rejected signup does not leave a new student behind.
///
/// Expected: Err(Conflict) and the student row rolled back
#[tokio::test]
async fn rolls_back_new_student_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .max_participants(0)
        .build()
        .await?;

    let result = ActivityService::new(db)
        .signup(&activity.name, "ghost@mergington.edu")
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a full activity reports Conflict only after the duplicate check.
///
/// Expected: Err(BadRequest) for an enrolled student even when the activity is full
#[tokio::test]
async fn reports_duplicate_before_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .max_participants(1)
        .build()
        .await?;
    let student = factory::student::create_student(db).await?;
    factory::signup::create_signup(db, activity.id, student.id).await?;

    let result = ActivityService::new(db)
        .signup(&activity.name, &student.email)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests two students racing for the last seat on a file-backed database.
///
/// Expected: exactly one Ok and one Conflict, with the activity filled exactly to capacity
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_signups_never_overfill() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let config = Config {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("race.db").display()),
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: "static".to_string(),
    };
    let db = startup::connect_to_database(&config).await?;

    let activity = factory::activity::ActivityFactory::new(&db)
        .name("Math Club")
        .max_participants(10)
        .build()
        .await?;
    for _ in 0..9 {
        let student = factory::student::create_student(&db).await?;
        factory::signup::create_signup(&db, activity.id, student.id).await?;
    }

    let service = ActivityService::new(&db);
    let (first, second) = tokio::join!(
        service.signup(&activity.name, "ada@mergington.edu"),
        service.signup(&activity.name, "grace@mergington.edu"),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count(),
        1
    );

    let count = entity::prelude::Signup::find()
        .filter(entity::signup::Column::ActivityId.eq(activity.id))
        .count(&db)
        .await?;
    assert_eq!(count, 10);

    db.close().await?;

    Ok(())
}
