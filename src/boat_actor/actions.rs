//! Custom actions for the Boat actor.
//!
//! These two actions are the only way `at_sea` ever changes after creation;
//! they are issued by the Slip actor's occupancy protocol, never directly by
//! API callers.

/// Occupancy transitions on a boat.
#[derive(Debug, Clone)]
pub enum BoatAction {
    /// Marks the boat as docked (`at_sea = false`).
    ///
    /// Fails with [`BoatError::AlreadyDocked`](super::BoatError::AlreadyDocked)
    /// when the boat is already in a slip, so a boat can never be referenced
    /// by two slips at once.
    Moor,

    /// Marks the boat as back at sea (`at_sea = true`). Idempotent.
    Release,
}
