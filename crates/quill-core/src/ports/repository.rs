use async_trait::async_trait;

use crate::domain::{BlogPost, PostDraft, PostQuery};
use crate::error::RepoError;

/// One page of listing results together with the unpaginated count.
#[derive(Debug, Clone)]
pub struct PostPage {
    /// Posts ordered by `created_at` descending, ties broken by `id`
    /// descending.
    pub items: Vec<BlogPost>,
    /// Matching records before offset/limit were applied.
    pub total_count: u64,
}

/// The post store: durable CRUD access to blog posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Paginated, filtered, sorted listing. The count and the page are read
    /// from a single consistent snapshot; an offset past the end yields an
    /// empty page, not an error.
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a new post: fresh id, `created_at = updated_at = now`,
    /// version token 1.
    async fn create(&self, draft: PostDraft) -> Result<BlogPost, RepoError>;

    /// Overwrite title/author/content of an existing post, refreshing
    /// `updated_at` and bumping the version token; `id` and `created_at`
    /// are preserved from the stored record.
    ///
    /// `expected_version` is the token captured when the caller last read
    /// the record. When given, a mismatch fails with [`RepoError::Conflict`]
    /// and nothing is written. When absent the write is last-writer-wins.
    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        expected_version: Option<i64>,
    ) -> Result<BlogPost, RepoError>;

    /// Remove a post. Deleting a missing id fails with
    /// [`RepoError::NotFound`], including a second delete of the same id.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
