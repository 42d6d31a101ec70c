//! Game catalog entries. Games are seeded externally and read-only here.

use serde::Serialize;

use crate::types::EntityId;

/// A game row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: EntityId,
    pub title: String,
    pub banner_url: String,
}

/// A game together with the number of ads posted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWithAdCount {
    pub id: EntityId,
    pub title: String,
    pub banner_url: String,
    #[serde(rename = "_count")]
    pub count: AdCount,
}

/// Relation counts attached to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdCount {
    pub ads: i64,
}
