//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire to match the browser frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::BlogPost;

/// Query string of `GET /api/posts`. Raw and unclamped; normalization
/// happens in the core.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub author: Option<String>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `PUT /api/posts/{id}`.
///
/// `id` is optional but must match the URL when present. `version` is the
/// token captured when the post was last read; sending it enables the
/// conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    pub version: Option<i64>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            version: post.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_accepts_camel_case() {
        let q: ListPostsQuery =
            serde_json::from_str(r#"{"page":2,"pageSize":5,"author":"john"}"#).unwrap();
        assert_eq!(q.page, Some(2));
        assert_eq!(q.page_size, Some(5));
        assert_eq!(q.author.as_deref(), Some("john"));
    }

    #[test]
    fn post_response_uses_camel_case_timestamps() {
        let post = BlogPost {
            id: 1,
            title: "t".into(),
            author: "a".into(),
            content: "c".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            version: 1,
        };
        let json = serde_json::to_string(&PostResponse::from(post)).unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
    }
}
