//! Post Repository Implementation
//!
//! PostgreSQL implementation of the PostRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Post, PostRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation of the posts table.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL post repository.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, title: &str) -> Result<Post, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title)
            VALUES ($1)
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_db_query("insert", "posts", start.elapsed().as_secs_f64());

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", "posts", start.elapsed().as_secs_f64());

        Ok(row.map(Post::from))
    }

    async fn update(&self, post: &Post) -> Result<Post, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("update", "posts", start.elapsed().as_secs_f64());

        row.map(Post::from)
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", post.id)))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_db_query("delete", "posts", start.elapsed().as_secs_f64());

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Post with id {} not found", id)));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Post>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, created_at, updated_at
            FROM posts
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select", "posts", start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let start = Instant::now();
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        metrics::record_db_query("count", "posts", start.elapsed().as_secs_f64());

        Ok(count)
    }
}
