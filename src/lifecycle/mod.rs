//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`MarinaSystem`] - spawns the actors, wires their dependencies, and
//!   coordinates graceful shutdown
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod marina_system;
pub mod tracing;

pub use marina_system::*;
pub use self::tracing::*;
