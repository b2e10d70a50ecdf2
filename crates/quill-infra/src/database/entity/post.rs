//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain post.
impl From<Model> for quill_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            version: model.version,
        }
    }
}

/// Conversion from the domain post to a SeaORM ActiveModel.
impl From<quill_core::domain::BlogPost> for ActiveModel {
    fn from(post: quill_core::domain::BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            author: Set(post.author),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            version: Set(post.version),
        }
    }
}
