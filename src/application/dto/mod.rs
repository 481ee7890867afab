//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreatePostRequest, ListPostsQuery, LoginRequest, RegisterRequest, UpdatePostRequest};
pub use response::{
    PaginationMeta, PostListResponse, PostResponse, RegisterResponse, TokenResponse, UserResponse,
};
