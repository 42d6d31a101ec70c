//! Domain core for the duo-finder service.
//!
//! Pure logic only: the hour-string codec, the weekday token-set codec, ad
//! and game models with input validation, the [`store::AdStore`] capability
//! and the [`service::AdService`] operations built on it.

pub mod ad;
pub mod error;
pub mod game;
pub mod service;
pub mod store;
pub mod time_codec;
pub mod token_set;
pub mod types;
