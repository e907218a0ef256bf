use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::utils::slugify;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub rating: i32,
    pub author_id: Option<i32>,
    pub is_bestselling: bool,
    pub slug: String, // harry-potter-1
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_countries::Relation::Country.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_countries::Relation::Book.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// The slug always follows the title, whatever the caller put in it.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        match &self.title {
            ActiveValue::Set(title) => self.slug = ActiveValue::Set(slugify(title)),
            ActiveValue::Unchanged(title) if insert => {
                self.slug = ActiveValue::Set(slugify(title))
            }
            _ => {}
        }
        Ok(self)
    }
}

impl Model {
    /// Canonical detail page URL
    pub fn absolute_url(&self) -> String {
        format!("/book-detail/{}", self.slug)
    }

    pub fn display(&self) -> String {
        format!("{} ({})", self.title, self.rating)
    }
}
