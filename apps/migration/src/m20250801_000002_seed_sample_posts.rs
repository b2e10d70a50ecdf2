//! Sample content so a fresh install has something to show.

use sea_orm_migration::prelude::*;

use crate::m20250801_000001_create_posts_table::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Posts::Table)
            .columns([
                Posts::Title,
                Posts::Author,
                Posts::Content,
                Posts::CreatedAt,
                Posts::UpdatedAt,
                Posts::Version,
            ])
            .values_panic([
                "Getting Started with Quill".into(),
                "John Doe".into(),
                "This is a sample blog post about getting started with Quill.".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
                1i64.into(),
            ])
            .values_panic([
                "Introduction to the REST API".into(),
                "Jane Smith".into(),
                "This is a sample blog post about the Quill REST API.".into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
                1i64.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Posts::Table)
            .cond_where(
                Expr::col(Posts::Author).is_in(["John Doe", "Jane Smith"]),
            )
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
