use marina::clients::{ActorClient, BoatClient, SlipClient};
use marina::framework::mock::MockClient;
use marina::framework::ActorError;
use marina::model::{Boat, SlipCreate};
use marina::slip_actor::SlipError;
use marina::validation::{ResourceKey, ResourceKind};

/// Integration test: real Slip actor with a mocked Boat dependency.
///
/// Pattern 2: Actor + Mocks
/// - Real Slip actor (tests the occupancy logic in handle_action)
/// - Mocked BoatClient (isolates the Boat actor)
#[tokio::test]
async fn test_arrival_with_mocked_boat_dependency() {
    let mut boat_mock = MockClient::<Boat>::new();
    // The Slip actor will issue a Moor action during arrival.
    boat_mock.expect_action().return_ok(());
    let boat_client = BoatClient::new(boat_mock.client());

    let (slip_actor, slip_client) = marina::slip_actor::new();
    let actor_handle = tokio::spawn(slip_actor.run(boat_client));

    let slip = slip_client
        .create_slip(SlipCreate { number: 12 })
        .await
        .expect("Failed to create slip");

    let boat_id = ResourceKey::new(ResourceKind::Boat, 1);
    let occupied = slip_client
        .arrive(slip.id, boat_id)
        .await
        .expect("Arrival failed");
    assert_eq!(occupied.current_boat, Some(boat_id));
    assert!(occupied.arrival_date.is_some());

    // The stored slip reflects the transition.
    let stored = slip_client.get(slip.id).await.unwrap().unwrap();
    assert_eq!(stored.current_boat, Some(boat_id));

    boat_mock.verify();

    drop(slip_client);
    actor_handle.await.unwrap();
}

/// A failed moor (boat missing) aborts the arrival without mutating the slip.
#[tokio::test]
async fn test_arrival_aborts_when_boat_is_missing() {
    let boat_id = ResourceKey::new(ResourceKind::Boat, 9);

    let mut boat_mock = MockClient::<Boat>::new();
    boat_mock
        .expect_action()
        .return_err(ActorError::NotFound(boat_id.to_string()));
    let boat_client = BoatClient::new(boat_mock.client());

    let (slip_actor, slip_client) = marina::slip_actor::new();
    let actor_handle = tokio::spawn(slip_actor.run(boat_client));

    let slip = slip_client.create_slip(SlipCreate { number: 3 }).await.unwrap();
    let err = slip_client.arrive(slip.id, boat_id).await.unwrap_err();
    assert_eq!(err, ActorError::Entity(SlipError::BoatNotFound(boat_id)));

    let stored = slip_client.get(slip.id).await.unwrap().unwrap();
    assert!(stored.current_boat.is_none());
    assert!(stored.arrival_date.is_none());

    boat_mock.verify();

    drop(slip_client);
    actor_handle.await.unwrap();
}

/// Departure issues a Release to the Boat actor and logs history.
#[tokio::test]
async fn test_departure_with_mocked_boat_dependency() {
    let mut boat_mock = MockClient::<Boat>::new();
    boat_mock.expect_action().return_ok(()); // Moor
    boat_mock.expect_action().return_ok(()); // Release
    let boat_client = BoatClient::new(boat_mock.client());

    let (slip_actor, slip_client) = marina::slip_actor::new();
    let actor_handle = tokio::spawn(slip_actor.run(boat_client));

    let slip = slip_client.create_slip(SlipCreate { number: 5 }).await.unwrap();
    let boat_id = ResourceKey::new(ResourceKind::Boat, 2);

    slip_client.arrive(slip.id, boat_id).await.unwrap();
    slip_client.depart(slip.id).await.unwrap();

    let stored = slip_client.get(slip.id).await.unwrap().unwrap();
    assert!(stored.current_boat.is_none());
    assert!(stored.arrival_date.is_none());
    assert_eq!(stored.departure_history.len(), 1);
    assert_eq!(stored.departure_history[0].departed_boat, boat_id);

    boat_mock.verify();

    drop(slip_client);
    actor_handle.await.unwrap();
}

fn new_slip_client() -> (SlipClient, tokio::task::JoinHandle<()>, MockClient<Boat>) {
    let boat_mock = MockClient::<Boat>::new();
    let boat_client = BoatClient::new(boat_mock.client());
    let (slip_actor, slip_client) = marina::slip_actor::new();
    let handle = tokio::spawn(slip_actor.run(boat_client));
    (slip_client, handle, boat_mock)
}

/// Unknown slip ids surface as transport-level NotFound.
#[tokio::test]
async fn test_unknown_slip_reports_not_found() {
    let (slip_client, actor_handle, _mock) = new_slip_client();

    let ghost = ResourceKey::new(ResourceKind::Slip, 99);
    let err = slip_client.depart(ghost).await.unwrap_err();
    assert_eq!(err, ActorError::NotFound(ghost.to_string()));

    drop(slip_client);
    actor_handle.await.unwrap();
}
