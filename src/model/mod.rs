//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod boat;
pub mod slip;

pub use boat::*;
pub use slip::*;
