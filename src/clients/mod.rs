//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod boat_client;
pub mod slip_client;
pub mod traits;

pub use boat_client::*;
pub use slip_client::*;
pub use traits::*;
