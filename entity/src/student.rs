use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::signup::Entity")]
    Signup,
}

impl Related<super::signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Signup.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        super::signup::Relation::Activity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::signup::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
