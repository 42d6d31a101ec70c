//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod ad_repo;
pub mod game_repo;

pub use ad_repo::AdRepo;
pub use game_repo::GameRepo;
