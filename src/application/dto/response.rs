//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::{AuthTokens, PostPage};
use crate::domain::{Post, User};

/// Single post response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Pagination details for list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub last_page: u32,
}

/// Post collection response
#[derive(Debug, Serialize, Deserialize)]
pub struct PostListResponse {
    pub data: Vec<PostResponse>,
    pub meta: PaginationMeta,
}

impl From<PostPage> for PostListResponse {
    fn from(page: PostPage) -> Self {
        let meta = PaginationMeta {
            current_page: page.page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page(),
        };

        Self {
            data: page.posts.into_iter().map(PostResponse::from).collect(),
            meta,
        }
    }
}

/// Authentication token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AuthTokens> for TokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        }
    }
}

/// Registration response (includes user and token)
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub token: TokenResponse,
}

/// User response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
