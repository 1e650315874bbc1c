use crate::api::MarinaApi;
use crate::clients::{BoatClient, SlipClient};
use tracing::{error, info};

/// The runtime orchestrator for the marina service.
///
/// `MarinaSystem` is responsible for:
/// - **Lifecycle**: starting and stopping both actors
/// - **Dependency wiring**: the Slip actor needs a [`BoatClient`] as its
///   context for the occupancy protocol
///
/// # Example
///
/// ```ignore
/// let system = MarinaSystem::new();
/// let boat = system.boat_client.create_boat(params).await?;
/// let slip = system.slip_client.create_slip(slip_params).await?;
/// system.slip_client.arrive(slip.id, boat.id).await?;
/// system.shutdown().await?;
/// ```
pub struct MarinaSystem {
    /// Client for interacting with the Boat actor.
    pub boat_client: BoatClient,

    /// Client for interacting with the Slip actor.
    pub slip_client: SlipClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MarinaSystem {
    /// Creates and starts the system with both actors running.
    pub fn new() -> Self {
        let (boat_actor, boat_client) = crate::boat_actor::new();
        let (slip_actor, slip_client) = crate::slip_actor::new();

        // Boat has no dependencies; Slip gets a BoatClient so arrivals and
        // departures can flip at_sea.
        let boat_handle = tokio::spawn(boat_actor.run(()));
        let slip_handle = tokio::spawn(slip_actor.run(boat_client.clone()));

        Self {
            boat_client,
            slip_client,
            handles: vec![boat_handle, slip_handle],
        }
    }

    /// Builds the JSON request surface on top of this system's clients.
    pub fn api(&self) -> MarinaApi {
        MarinaApi::new(self.boat_client.clone(), self.slip_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits. The Slip actor's context holds a `BoatClient` clone,
    /// so the Boat actor only sees its channel close once the Slip actor has
    /// stopped — shutdown order resolves itself.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.boat_client);
        drop(self.slip_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for MarinaSystem {
    fn default() -> Self {
        Self::new()
    }
}
