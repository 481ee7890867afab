//! # Domain Layer
//!
//! The domain layer contains the core business types of the posts API.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain rules (e.g. title normalization)

pub mod entities;

pub use entities::*;
