//! # Observability & Tracing
//!
//! Structured logging for the whole system, built on the `tracing` crate.
//!
//! Actors log every lifecycle event (startup, each operation, shutdown) with
//! structured fields; client methods open spans via `#[instrument]`, so a
//! request's full path — client call, actor handler, any cross-actor hop the
//! occupancy protocol makes — shows up as one hierarchy.
//!
//! Verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run       # lifecycle events
//! RUST_LOG=debug cargo run      # full request payloads
//! RUST_LOG=marina::framework=debug cargo run
//! ```

/// Initializes the tracing/logging infrastructure.
///
/// Call once at startup, before any actor is spawned.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
