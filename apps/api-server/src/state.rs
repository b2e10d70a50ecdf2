//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate post store.
    ///
    /// Postgres when `DATABASE_URL` is configured, otherwise the in-memory
    /// store (posts vanish on restart).
    pub async fn new(config: &AppConfig) -> Self {
        if let Some(posts) = Self::database_store(config).await {
            tracing::info!("Application state initialized (postgres store)");
            return Self { posts };
        }

        tracing::info!("Application state initialized (in-memory store)");
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    /// State backed by a caller-supplied store.
    #[cfg(test)]
    pub fn with_store(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    #[cfg(feature = "postgres")]
    async fn database_store(config: &AppConfig) -> Option<Arc<dyn PostRepository>> {
        let db_config = match &config.database {
            Some(c) => c,
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                return None;
            }
        };

        match quill_infra::connect(db_config).await {
            Ok(conn) => Some(Arc::new(quill_infra::PostgresPostRepository::new(conn))),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn database_store(_config: &AppConfig) -> Option<Arc<dyn PostRepository>> {
        tracing::info!("Running without postgres feature - using the in-memory store");
        None
    }
}
