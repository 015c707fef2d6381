use sea_orm::entity::prelude::*;

/// A job posting. `user_id` is whatever the poster claimed and is not
/// backed by a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub salary: Option<String>,
    pub posted_at: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
