//! Demo entry point: boots the system, walks a boat through one full
//! occupancy cycle, and shuts down.

use marina::lifecycle::{setup_tracing, MarinaSystem};
use marina::model::{BoatCreate, SlipCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting marina system");
    let system = MarinaSystem::new();

    let boat_params = BoatCreate {
        name: "Gem of the Ocean".to_string(),
        boat_type: Some("sloop".to_string()),
        length: Some(32),
    };

    let span = tracing::info_span!("boat_creation");
    let boat = async {
        info!("Creating boat");
        system
            .boat_client
            .create_boat(boat_params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(boat_id = %boat.id, at_sea = boat.at_sea, "Boat created");

    let slip = async {
        info!("Creating slip");
        system
            .slip_client
            .create_slip(SlipCreate { number: 7 })
            .await
            .map_err(|e| e.to_string())
    }
    .await?;

    info!(slip_id = %slip.id, number = slip.number, "Slip created");

    let span = tracing::info_span!("occupancy_cycle");
    let result = async {
        info!("Boat arriving");
        let occupied = system.slip_client.arrive(slip.id, boat.id).await?;
        info!(arrival_date = ?occupied.arrival_date, "Slip occupied");

        info!("Boat departing");
        system.slip_client.depart(slip.id).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(()) => info!("Occupancy cycle complete"),
        Err(e) => error!(error = %e, "Occupancy cycle failed"),
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
