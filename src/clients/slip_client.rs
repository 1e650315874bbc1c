//! # Slip Client
//!
//! High-level API for interacting with the Slip actor, including the
//! occupancy protocol (arrive/depart).

use crate::clients::traits::ActorClient;
use crate::framework::{ActorError, ResourceClient};
use crate::model::{Slip, SlipCreate, SlipUpdate};
use crate::slip_actor::{SlipAction, SlipActionResult, SlipError};
use crate::validation::ResourceKey;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Slip actor.
#[derive(Clone)]
pub struct SlipClient {
    inner: ResourceClient<Slip>,
}

impl SlipClient {
    pub fn new(inner: ResourceClient<Slip>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_slip(&self, params: SlipCreate) -> Result<Slip, ActorError<SlipError>> {
        debug!(?params, "create_slip called");
        self.inner.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_slip(
        &self,
        id: ResourceKey,
        update: SlipUpdate,
    ) -> Result<Slip, ActorError<SlipError>> {
        debug!(?update, "update_slip called");
        self.inner.update(id, update).await
    }

    /// Docks a boat in the slip. Returns the updated slip.
    #[instrument(skip(self))]
    pub async fn arrive(
        &self,
        slip: ResourceKey,
        boat: ResourceKey,
    ) -> Result<Slip, ActorError<SlipError>> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(slip, SlipAction::Arrive { boat })
            .await?
        {
            SlipActionResult::Arrive(slip) => Ok(slip),
            SlipActionResult::Depart => unreachable!("Arrive action must return Arrive result"),
        }
    }

    /// Ends the slip's current occupancy.
    #[instrument(skip(self))]
    pub async fn depart(&self, slip: ResourceKey) -> Result<(), ActorError<SlipError>> {
        debug!("Sending request");
        match self.inner.perform_action(slip, SlipAction::Depart).await? {
            SlipActionResult::Depart => Ok(()),
            SlipActionResult::Arrive(_) => unreachable!("Depart action must return Depart result"),
        }
    }
}

#[async_trait]
impl ActorClient<Slip> for SlipClient {
    fn inner(&self) -> &ResourceClient<Slip> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::validation::ResourceKind;

    fn keys() -> (ResourceKey, ResourceKey) {
        (
            ResourceKey::new(ResourceKind::Slip, 1),
            ResourceKey::new(ResourceKind::Boat, 1),
        )
    }

    #[tokio::test]
    async fn arrive_sends_the_action_and_unwraps_the_slip() {
        let (client, mut receiver) = create_mock_client::<Slip>(10);
        let slip_client = SlipClient::new(client);
        let (slip_key, boat_key) = keys();

        let task = tokio::spawn(async move { slip_client.arrive(slip_key, boat_key).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, slip_key);
        match action {
            SlipAction::Arrive { boat } => assert_eq!(boat, boat_key),
            _ => panic!("Expected Arrive action"),
        }

        let mut slip = Slip::new(slip_key, 7);
        slip.current_boat = Some(boat_key);
        slip.arrival_date = Some("2026-08-25 12:00:00".to_string());
        responder.send(Ok(SlipActionResult::Arrive(slip))).unwrap();

        let returned = task.await.unwrap().unwrap();
        assert_eq!(returned.current_boat, Some(boat_key));
    }

    #[tokio::test]
    async fn depart_surfaces_empty_slip() {
        let (client, mut receiver) = create_mock_client::<Slip>(10);
        let slip_client = SlipClient::new(client);
        let (slip_key, _) = keys();

        let task = tokio::spawn(async move { slip_client.depart(slip_key).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, SlipAction::Depart));
        responder
            .send(Err(ActorError::Entity(SlipError::Empty(slip_key))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, ActorError::Entity(SlipError::Empty(slip_key)));
    }
}
