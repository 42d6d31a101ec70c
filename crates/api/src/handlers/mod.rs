//! Request handlers.
//!
//! Handlers decode the request, delegate to [`duo_core::service::AdService`]
//! and map errors via [`AppError`](crate::error::AppError).

pub mod ads;
pub mod games;
