use super::*;

/// Tests that an unknown email creates a new student.
///
/// Expected: Ok with a new row inserted
#[tokio::test]
async fn creates_student_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db)
        .find_or_create("liam@mergington.edu")
        .await?;

    assert_eq!(student.email, "liam@mergington.edu");
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an existing email is reused.
///
/// Expected: Ok with the existing student and no new row
#[tokio::test]
async fn returns_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing =
        factory::student::create_student_with_email(db, "noah@mergington.edu").await?;

    let student = StudentRepository::new(db)
        .find_or_create("noah@mergington.edu")
        .await?;

    assert_eq!(student.id, existing.id);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}
