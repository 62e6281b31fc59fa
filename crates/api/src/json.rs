//! JSON request extractor with JSON error bodies.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] whose rejection is an [`AppError`], so a body
/// that fails to deserialize gets the usual `{"error", "code"}` 400 instead
/// of axum's plain-text 415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
