//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PostService**: Post CRUD and pagination
//! - **AuthService**: Registration, password checks, JWT access tokens

pub mod auth_service;
pub mod post_service;

// Re-export auth service types
pub use auth_service::{AuthError, AuthService, AuthServiceImpl, AuthTokens, Claims};

// Re-export post service types
pub use post_service::{
    CreatePostDto, PostError, PostPage, PostService, PostServiceImpl, UpdatePostDto,
    DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
