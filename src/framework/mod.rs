//! Generic actor framework for resource management.
//!
//! The core building blocks for type-safe actors that manage resource
//! entities with CRUD operations and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait a resource type implements to be managed
//! - [`ResourceActor`] - generic actor owning the entity store
//! - [`ResourceClient`] - typed client for talking to an actor
//! - [`ActorError`] - transport errors wrapping the entity's own error type
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
