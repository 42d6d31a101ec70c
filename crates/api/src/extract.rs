//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's built-in `Json` and `Path` reject with plain-text bodies; these
//! wrappers keep every error response in the `{ error, code }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Missing or mistyped fields become `VALIDATION_ERROR`,
/// syntax and content-type problems become `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. Unparsable segments (e.g. a malformed UUID) become
/// `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
