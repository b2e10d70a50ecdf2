//! In-memory post store.
//!
//! Backs the API when `DATABASE_URL` is not set and carries the CRUD
//! scenario tests. Ids come from an atomic counter and are never reused,
//! so a deleted id stays dead for the lifetime of the store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{BlogPost, PostDraft, PostQuery, check_conflict};
use quill_core::error::RepoError;
use quill_core::ports::{PostPage, PostRepository};

/// Post store keeping everything in process memory.
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i64, BlogPost>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_author(post: &BlogPost, filter: Option<&str>) -> bool {
    match filter {
        Some(needle) => post
            .author
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        None => true,
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError> {
        // The read guard is held for the whole call, so count and page come
        // from one consistent snapshot.
        let posts = self.posts.read().await;

        let mut matching: Vec<&BlogPost> = posts
            .values()
            .filter(|p| matches_author(p, query.author.as_deref()))
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total_count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .cloned()
            .collect();

        Ok(PostPage { items, total_count })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<BlogPost, RepoError> {
        let now = Utc::now();
        let post = BlogPost {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            author: draft.author,
            content: draft.content,
            created_at: now,
            updated_at: now,
            version: 1,
        };

        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: i64,
        draft: PostDraft,
        expected_version: Option<i64>,
    ) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let existing = posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        if let Some(expected) = expected_version {
            check_conflict(existing.version, expected).map_err(|_| RepoError::Conflict)?;
        }

        existing.title = draft.title;
        existing.author = draft.author;
        existing.content = draft.content;
        existing.updated_at = Utc::now();
        existing.version += 1;

        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}
