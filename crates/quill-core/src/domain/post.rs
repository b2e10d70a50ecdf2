use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted blog post.
///
/// `id`, both timestamps and `version` are assigned by the store; `version`
/// is the opaque token callers hand back to detect concurrent modification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

/// The candidate fields of a post before the store stamps id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}
