//! Post Handlers

use axum::{
    extract::{rejection::QueryRejection, Extension, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};
use crate::application::dto::response::{PostListResponse, PostResponse};
use crate::application::services::{CreatePostDto, UpdatePostDto};
use crate::presentation::http::extractors::{PostId, ValidatedJson};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List posts
pub async fn list_posts(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<PostListResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::debug!(user_id = auth.user_id, ?query, "Listing posts");

    let page = state.posts.list_posts(query.page, query.per_page).await?;

    Ok(Json(PostListResponse::from(page)))
}

/// Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let request = CreatePostDto {
        title: body.title.unwrap_or_default(),
    };

    let post = state.posts.create_post(request).await?;
    tracing::debug!(user_id = auth.user_id, post_id = post.id, "Post created via API");

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Get post by ID
pub async fn get_post(
    State(state): State<AppState>,
    PostId(post_id): PostId,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.posts.get_post(post_id).await?;

    Ok(Json(PostResponse::from(post)))
}

/// Update post title
///
/// The id is resolved before the body is judged: a bad id is a 400 and an
/// unknown one a 404, whatever the payload holds.
pub async fn update_post(
    State(state): State<AppState>,
    PostId(post_id): PostId,
    body: Result<ValidatedJson<UpdatePostRequest>, AppError>,
) -> Result<Json<PostResponse>, AppError> {
    let ValidatedJson(body) = match body {
        Ok(body) => body,
        Err(error) => {
            state.posts.get_post(post_id).await?;
            return Err(error);
        }
    };

    let update = UpdatePostDto {
        title: body.title.unwrap_or_default(),
    };

    let post = state.posts.update_post(post_id, update).await?;

    Ok(Json(PostResponse::from(post)))
}

/// Delete post
pub async fn delete_post(
    State(state): State<AppState>,
    PostId(post_id): PostId,
) -> Result<StatusCode, AppError> {
    state.posts.delete_post(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

