//! Custom Axum extractors
//!
//! Thin wrappers over axum's `Json`, `Path` and `Query` that reject with
//! [`ApiError`] so malformed input gets the same JSON error body as
//! everything else.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// JSON body, rejected as a validation error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Path parameters, rejected as a validation error
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);

/// Query string, rejected as a validation error
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ValidQuery<T>(pub T);
