//! Post Service
//!
//! Handles post creation, retrieval, update, deletion and listing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Post, PostRepository};
use crate::shared::error::AppError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a new post
    async fn create_post(&self, request: CreatePostDto) -> Result<Post, PostError>;

    /// Get post by ID
    async fn get_post(&self, post_id: i64) -> Result<Post, PostError>;

    /// Replace a post's title
    async fn update_post(&self, post_id: i64, update: UpdatePostDto) -> Result<Post, PostError>;

    /// Delete a post
    async fn delete_post(&self, post_id: i64) -> Result<(), PostError>;

    /// List posts, one page at a time
    async fn list_posts(&self, page: Option<u32>, per_page: Option<u32>)
        -> Result<PostPage, PostError>;
}

/// Create post request
#[derive(Debug, Clone)]
pub struct CreatePostDto {
    pub title: String,
}

/// Update post request
#[derive(Debug, Clone)]
pub struct UpdatePostDto {
    pub title: String,
}

/// One page of posts plus the numbers needed to navigate the rest.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

impl PostPage {
    /// Index of the last page; an empty collection still has page 1.
    pub fn last_page(&self) -> u32 {
        if self.total <= 0 {
            return 1;
        }
        let per_page = i64::from(self.per_page.max(1));
        let pages = (self.total + per_page - 1) / per_page;
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("{0}")]
    InvalidTitle(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for PostError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::NotFound(_) => PostError::NotFound,
            e => PostError::Internal(e.to_string()),
        }
    }
}

impl From<PostError> for AppError {
    fn from(error: PostError) -> Self {
        match error {
            PostError::NotFound => AppError::NotFound("Post not found".into()),
            PostError::InvalidTitle(message) => AppError::validation("title", message),
            PostError::Internal(message) => AppError::Internal(message),
        }
    }
}

/// PostService implementation
pub struct PostServiceImpl<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> PostServiceImpl<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    fn normalize_title(raw: &str) -> Result<String, PostError> {
        Post::normalize_title(raw).map_err(PostError::InvalidTitle)
    }
}

#[async_trait]
impl<R> PostService for PostServiceImpl<R>
where
    R: PostRepository + 'static,
{
    async fn create_post(&self, request: CreatePostDto) -> Result<Post, PostError> {
        let title = Self::normalize_title(&request.title)?;

        let post = self.post_repo.create(&title).await?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    async fn get_post(&self, post_id: i64) -> Result<Post, PostError> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn update_post(&self, post_id: i64, update: UpdatePostDto) -> Result<Post, PostError> {
        let title = Self::normalize_title(&update.title)?;

        let mut post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        post.retitle(title);
        let updated = self.post_repo.update(&post).await?;

        tracing::info!(post_id = updated.id, "Post updated");
        Ok(updated)
    }

    async fn delete_post(&self, post_id: i64) -> Result<(), PostError> {
        self.post_repo.delete(post_id).await?;

        tracing::info!(post_id, "Post deleted");
        Ok(())
    }

    async fn list_posts(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PostPage, PostError> {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        let offset = (i64::from(page) - 1) * i64::from(per_page);

        let posts = self.post_repo.list(i64::from(per_page), offset).await?;
        let total = self.post_repo.count().await?;

        tracing::debug!(page, per_page, total, "Listed posts");
        Ok(PostPage {
            posts,
            page,
            per_page,
            total,
        })
    }
}
