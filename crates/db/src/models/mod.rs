//! Row structs matching the database tables.
//!
//! Each row converts into its `duo_core` counterpart; the domain crate stays
//! free of `sqlx`.

pub mod ad;
pub mod game;
