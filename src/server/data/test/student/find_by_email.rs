use super::*;

/// Tests finding a student by email.
///
/// Expected: Ok(Some) with the stored student
#[tokio::test]
async fn finds_student_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created =
        factory::student::create_student_with_email(db, "emma@mergington.edu").await?;

    let found = StudentRepository::new(db)
        .find_by_email("emma@mergington.edu")
        .await?;

    assert_eq!(found.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::create_student(db).await?;

    let found = StudentRepository::new(db)
        .find_by_email("nobody@mergington.edu")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that duplicate emails resolve to the oldest row.
///
/// Expected: Ok(Some) with the first inserted student
#[tokio::test]
async fn returns_oldest_student_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::student::create_student_with_email(db, "ava@mergington.edu").await?;
    factory::student::create_student_with_email(db, "ava@mergington.edu").await?;

    let found = StudentRepository::new(db)
        .find_by_email("ava@mergington.edu")
        .await?;

    assert_eq!(found.map(|s| s.id), Some(first.id));

    Ok(())
}
