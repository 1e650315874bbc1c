//! # Marina
//!
//! A marina-management service built as a resource-oriented actor system:
//! clients create and query **Boat** and **Slip** resources, and move a boat
//! into or out of a slip (arrival/departure).
//!
//! ## Architecture
//!
//! The codebase is organized into four layers:
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers everything. It separates the
//! business logic (your entity) from the plumbing (channels, message loop,
//! error handling).
//! - Key items: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Implementation ([`boat_actor`], [`slip_actor`])
//! Concrete entities built on the recipe. [`model`] holds the pure data
//! structures; [`validation`] guards the boundary (typed identifiers, payload
//! checks). The Slip actor owns the occupancy protocol: a slip holds at most
//! one boat, arrival/departure mutate the slip and the boat as a unit, and
//! departures append to an immutable history log.
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! Raw message passing is never exposed. [`clients`] wraps the generic
//! `ResourceClient` in domain-specific clients; [`api`] maps the JSON request
//! surface (ids in, bodies in/out, status codes on errors) onto them.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`MarinaSystem`](lifecycle::MarinaSystem) spins up the actors, wires the
//! Slip actor's `BoatClient` context, and shuts everything down gracefully.
//!
//! ## Concurrency Model
//!
//! Each actor runs in its own Tokio task and processes messages sequentially,
//! so occupancy checks and slip-number uniqueness scans are serialized
//! without locks: concurrent arrivals against the same empty slip yield
//! exactly one success.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run    # demo workflow
//! cargo test
//! ```

pub mod api;
pub mod boat_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod slip_actor;
pub mod validation;
