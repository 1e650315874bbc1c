//! Custom actions for the Slip actor: the occupancy protocol.
//!
//! Arrival and departure mutate two entities — the slip and the boat — as a
//! unit. Both actions run inside the Slip actor's message handler, which the
//! actor awaits to completion before taking the next request, so the
//! check-then-write sequence is serialized and a slip can never be
//! double-booked.

use crate::model::Slip;
use crate::validation::ResourceKey;

/// Occupancy transitions on a slip.
#[derive(Debug, Clone)]
pub enum SlipAction {
    /// Docks the given boat here: sets `current_boat` and `arrival_date`,
    /// and moors the boat (`at_sea = false`).
    Arrive { boat: ResourceKey },

    /// Ends the current occupancy: appends a departure record, clears
    /// `current_boat` and `arrival_date`, and releases the boat back to sea.
    Depart,
}

/// Results from SlipActions - variants match 1:1 with [`SlipAction`].
#[derive(Debug, Clone)]
pub enum SlipActionResult {
    /// The updated slip after a successful arrival.
    Arrive(Slip),
    /// Departure completed; there is nothing to return.
    Depart,
}
