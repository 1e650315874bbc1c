//! Error types for the Slip actor.

use crate::validation::ResourceKey;
use thiserror::Error;

/// Errors that can occur during slip operations, including the occupancy
/// protocol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlipError {
    /// Another slip already carries the requested number.
    #[error("A slip with that number already exists")]
    DuplicateNumber(i64),

    /// An arrival was requested for a slip that already holds a boat.
    #[error("Slip {0} is already occupied")]
    Occupied(ResourceKey),

    /// A departure was requested for a slip with no boat docked.
    #[error("Slip {0} has no boat docked")]
    Empty(ResourceKey),

    /// The boat named in an arrival does not exist.
    #[error("Boat {0} not found")]
    BoatNotFound(ResourceKey),

    /// The boat named in an arrival is already docked in another slip.
    #[error("Boat {0} is already docked in another slip")]
    BoatAlreadyDocked(ResourceKey),

    /// The boat actor could not be reached or failed unexpectedly.
    #[error("boat service unavailable: {0}")]
    BoatUnavailable(String),
}
