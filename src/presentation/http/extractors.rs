//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// JSON body that has passed its `Validate` rules.
///
/// The body is read as untyped JSON first so a value of the wrong type is
/// reported against the field it was found in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        let value: T = serde_path_to_error::deserialize(raw).map_err(data_error)?;

        value.validate().map_err(validation_error)?;

        Ok(ValidatedJson(value))
    }
}

/// Numeric post id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse()
            .map(PostId)
            .map_err(|_| AppError::BadRequest("Invalid post ID".into()))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) => {
            AppError::validation("body", "The body field is invalid.")
        }
        JsonRejection::JsonSyntaxError(e) => AppError::BadRequest(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => AppError::UnsupportedMediaType(e.body_text()),
        e => AppError::BadRequest(e.body_text()),
    }
}

fn data_error(error: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let path = error.path().to_string();
    let detail = error.inner().to_string();
    let at_root = path == ".";

    if let Some(missing) = missing_field(&detail) {
        let field = if at_root {
            missing.to_string()
        } else {
            format!("{}.{}", path, missing)
        };
        let message = format!("The {} field is required.", field);
        return AppError::validation(field, message);
    }

    let field = if at_root { "body".to_string() } else { path };
    let message = if detail.contains("expected a string") {
        format!("The {} must be a string.", field)
    } else if detail.contains("expected i") || detail.contains("expected u") {
        format!("The {} must be an integer.", field)
    } else if detail.contains("expected a boolean") {
        format!("The {} field must be true or false.", field)
    } else {
        format!("The {} field is invalid.", field)
    };

    AppError::validation(field, message)
}

// serde reports these as "missing field `name`"
fn missing_field(detail: &str) -> Option<&str> {
    detail.strip_prefix("missing field `")?.split('`').next()
}
