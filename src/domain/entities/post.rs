//! Post entity and repository trait.
//!
//! Maps to the `posts` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a post.
///
/// Maps to the `posts` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(255) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Database-assigned ID (primary key)
    pub id: i64,

    /// Post title (1-255 characters, never blank)
    pub title: String,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Upper bound on title length, matching the column width.
    pub const MAX_TITLE_LENGTH: usize = 255;

    /// Trim a raw title and check it against the title rules.
    ///
    /// Returns the normalized title, or a message describing the violation.
    pub fn normalize_title(raw: &str) -> Result<String, String> {
        let title = raw.trim();
        if title.is_empty() {
            return Err("The title field is required.".into());
        }
        if title.chars().count() > Self::MAX_TITLE_LENGTH {
            return Err(format!(
                "The title may not be greater than {} characters.",
                Self::MAX_TITLE_LENGTH
            ));
        }
        Ok(title.to_string())
    }

    /// Replace the title and bump `updated_at`.
    pub fn retitle(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

/// Repository trait for Post data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; id and timestamps are assigned by the store.
    async fn create(&self, title: &str) -> Result<Post, AppError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Persist a post's title and refresh its `updated_at`.
    ///
    /// Returns `AppError::NotFound` if the post no longer exists.
    async fn update(&self, post: &Post) -> Result<Post, AppError>;

    /// Delete a post.
    ///
    /// Returns `AppError::NotFound` if no row was removed.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// List posts in ascending ID order.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Post>, AppError>;

    /// Total number of posts.
    async fn count(&self) -> Result<i64, AppError>;
}
