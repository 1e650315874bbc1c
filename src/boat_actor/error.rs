//! Error types for the Boat actor.

use crate::validation::ResourceKey;
use thiserror::Error;

/// Errors that can occur during boat operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoatError {
    /// The boat is docked in a slip and cannot be deleted until it departs.
    #[error("Boat {0} is docked in a slip and cannot be deleted")]
    Docked(ResourceKey),

    /// A moor was requested for a boat that is already docked somewhere.
    #[error("Boat {0} is already docked in a slip")]
    AlreadyDocked(ResourceKey),
}
