//! Boat-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::BoatClient;
use crate::framework::ResourceActor;
use crate::model::Boat;
use crate::validation::{ResourceKey, ResourceKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Boat actor and its client.
pub fn new() -> (ResourceActor<Boat>, BoatClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_boat_id = move || {
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        ResourceKey::new(ResourceKind::Boat, serial)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_boat_id);
    (actor, BoatClient::new(generic_client))
}
