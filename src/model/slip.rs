//! The Slip resource and its payload types.

use crate::validation::ResourceKey;
use serde::{Deserialize, Serialize};

/// A docking berth holding at most one boat at a time.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::slip_actor`]), so it is managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Invariants
/// - `number` is unique across all slips.
/// - `current_boat.is_none()` implies `arrival_date.is_none()`.
/// - `departure_history` is append-only; records are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slip {
    pub id: ResourceKey,
    pub number: i64,
    pub current_boat: Option<ResourceKey>,
    pub arrival_date: Option<String>,
    pub departure_history: Vec<DepartureRecord>,
}

impl Slip {
    /// Creates a new, empty slip. Occupancy state only changes through the
    /// Arrive/Depart actions.
    pub fn new(id: ResourceKey, number: i64) -> Self {
        Self {
            id,
            number,
            current_boat: None,
            arrival_date: None,
            departure_history: Vec::new(),
        }
    }

    /// Whether a boat is currently docked here.
    pub fn is_occupied(&self) -> bool {
        self.current_boat.is_some()
    }
}

/// One completed occupancy, recorded when a boat departs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureRecord {
    pub departure_date: String,
    pub departed_boat: ResourceKey,
}

/// Payload for creating a new slip.
#[derive(Debug, Clone)]
pub struct SlipCreate {
    pub number: i64,
}

/// Payload for partially updating a slip.
///
/// Only `number` is client-writable; occupancy fields are owned by the
/// Arrive/Depart actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlipUpdate {
    pub number: Option<i64>,
}
