//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::Post;
use crate::shared::validation::not_blank;

/// Create post request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "The title field is required."),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
}

/// Update post request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(
        required(message = "The title field is required."),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
}

/// Post listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

/// Delegates to the entity's title rules.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    Post::normalize_title(title).map(|_| ()).map_err(|message| {
        let mut error = ValidationError::new("title");
        error.message = Some(message.into());
        error
    })
}
