//! Slip-specific resource logic, including the occupancy protocol.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SlipClient;
use crate::framework::ResourceActor;
use crate::model::Slip;
use crate::validation::{ResourceKey, ResourceKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Slip actor and its client.
///
/// The actor's context — the [`BoatClient`](crate::clients::BoatClient) used
/// by arrivals and departures — is injected later, when the caller starts the
/// actor with [`ResourceActor::run`].
pub fn new() -> (ResourceActor<Slip>, SlipClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_slip_id = move || {
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        ResourceKey::new(ResourceKind::Slip, serial)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_slip_id);
    (actor, SlipClient::new(generic_client))
}
