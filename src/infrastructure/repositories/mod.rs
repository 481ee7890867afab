//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use posts_api::infrastructure::repositories::{PgPostRepository, PgUserRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let post_repo = PgPostRepository::new(pool.clone());
//!     let user_repo = PgUserRepository::new(pool);
//! }
//! ```

pub mod post_repository;
pub mod user_repository;

pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;
