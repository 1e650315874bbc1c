//! The Boat resource and its payload types.

use crate::validation::ResourceKey;
use serde::{Deserialize, Serialize};

/// A vessel that is either at sea or docked in exactly one slip.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::boat_actor`]), so it is managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// `at_sea` is owned by the occupancy protocol: it is forced to `true` at
/// creation and only ever changed by the Moor/Release actions, never through
/// the update path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boat {
    pub id: ResourceKey,
    pub name: String,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length: Option<i64>,
    pub at_sea: bool,
}

impl Boat {
    pub fn new(id: ResourceKey, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            boat_type: None,
            length: None,
            at_sea: true,
        }
    }
}

/// Payload for creating a new boat.
#[derive(Debug, Clone)]
pub struct BoatCreate {
    pub name: String,
    pub boat_type: Option<String>,
    pub length: Option<i64>,
}

/// Payload for partially updating a boat.
///
/// There is deliberately no `at_sea` field here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoatUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub boat_type: Option<String>,
    pub length: Option<i64>,
}
