//! Student data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::student::Student;

/// Repository providing database operations for students.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a student by email.
    ///
    /// Email is not unique at the schema level; if duplicates exist the oldest row wins.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .order_by_asc(entity::student::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Inserts a new student with the given email.
    pub async fn create(&self, email: &str) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Returns the student with the given email, creating it if absent.
    ///
    /// # Returns
    /// - `Ok(Student)` - Existing or newly created student
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn find_or_create(&self, email: &str) -> Result<Student, DbErr> {
        match self.find_by_email(email).await? {
            Some(student) => Ok(student),
            None => self.create(email).await,
        }
    }
}
