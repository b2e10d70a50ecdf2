//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: id {id}")]
    NotFound { id: i64 },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("ID in URL ({path}) must match ID in body ({body})")]
    IdMismatch { path: i64, body: i64 },

    #[error("The post was modified by another writer")]
    Conflict,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Concurrent modification detected")]
    Conflict,
}
