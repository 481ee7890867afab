//! # Domain Entities
//!
//! Core domain entities and their repository traits.
//!
//! - **Post**: the published resource served under `/api/posts`
//! - **User**: an account that can obtain access tokens
//!
//! Repository traits are implemented in the infrastructure layer.

mod post;
mod user;

pub use post::{Post, PostRepository};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use user::MockUserRepository;
