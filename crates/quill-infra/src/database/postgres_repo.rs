//! PostgreSQL post store backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, TransactionTrait,
};

use quill_core::domain::{BlogPost, PostDraft, PostQuery, check_conflict};
use quill_core::error::RepoError;
use quill_core::ports::{PostPage, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Escape LIKE wildcards so a filter like `50%` matches literally.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Base select with the author filter applied; shared by count and page.
fn filtered_select(query: &PostQuery) -> Select<PostEntity> {
    let mut select = PostEntity::find();

    if let Some(author) = &query.author {
        let pattern = format!("%{}%", escape_like(&author.to_lowercase()));
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(post::Column::Author))).like(pattern),
        );
    }

    select
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        // Count and page inside one transaction so concurrent writes cannot
        // skew the pagination metadata against the returned rows.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let total_count = filtered_select(query)
            .count(&txn)
            .await
            .map_err(map_db_err)?;

        let rows = filtered_select(query)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .offset(query.offset())
            .limit(query.page_size)
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(PostPage {
            items: rows.into_iter().map(Into::into).collect(),
            total_count,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let now = Utc::now();
        let active = post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            author: Set(draft.author),
            content: Set(draft.content),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            version: Set(1),
        };

        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = model.id, "Created post");

        Ok(model.into())
    }

    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        expected_version: Option<i64>,
    ) -> Result<BlogPost, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Row lock serializes writers on this post; unrelated posts stay
        // unblocked.
        let existing = PostEntity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if let Some(expected) = expected_version {
            check_conflict(existing.version, expected).map_err(|_| RepoError::Conflict)?;
        }

        let active = post::ActiveModel {
            id: Set(existing.id),
            title: Set(draft.title),
            author: Set(draft.author),
            content: Set(draft.content),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now().into()),
            version: Set(existing.version + 1),
        };

        let model = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(post_id = model.id, version = model.version, "Updated post");

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod like_tests {
    use super::escape_like;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
