use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_student_table::Student;
use super::m20251019_000002_create_activity_table::Activity;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signup::Table)
                    .if_not_exists()
                    .col(integer(Signup::StudentId))
                    .col(integer(Signup::ActivityId))
                    .col(timestamp_with_time_zone(Signup::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_signup")
                            .col(Signup::StudentId)
                            .col(Signup::ActivityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_student_id")
                            .from(Signup::Table, Signup::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_activity_id")
                            .from(Signup::Table, Signup::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Signup {
    Table,
    StudentId,
    ActivityId,
    CreatedAt,
}
