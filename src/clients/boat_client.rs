//! # Boat Client
//!
//! High-level API for interacting with the Boat actor. Wraps a
//! `ResourceClient<Boat>` and exposes domain-specific methods.

use crate::boat_actor::{BoatAction, BoatError};
use crate::clients::traits::ActorClient;
use crate::framework::{ActorError, ResourceClient};
use crate::model::{Boat, BoatCreate, BoatUpdate};
use crate::validation::ResourceKey;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Boat actor.
#[derive(Clone)]
pub struct BoatClient {
    inner: ResourceClient<Boat>,
}

impl BoatClient {
    pub fn new(inner: ResourceClient<Boat>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_boat(&self, params: BoatCreate) -> Result<Boat, ActorError<BoatError>> {
        debug!(?params, "create_boat called");
        self.inner.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_boat(
        &self,
        id: ResourceKey,
        update: BoatUpdate,
    ) -> Result<Boat, ActorError<BoatError>> {
        debug!(?update, "update_boat called");
        self.inner.update(id, update).await
    }

    /// Marks a boat as docked. Issued by the Slip actor during arrival.
    #[instrument(skip(self))]
    pub async fn moor(&self, id: ResourceKey) -> Result<(), ActorError<BoatError>> {
        debug!("Sending request");
        self.inner.perform_action(id, BoatAction::Moor).await
    }

    /// Marks a boat as back at sea. Issued by the Slip actor during
    /// departure and occupied-slip deletion.
    #[instrument(skip(self))]
    pub async fn release(&self, id: ResourceKey) -> Result<(), ActorError<BoatError>> {
        debug!("Sending request");
        self.inner.perform_action(id, BoatAction::Release).await
    }
}

#[async_trait]
impl ActorClient<Boat> for BoatClient {
    fn inner(&self) -> &ResourceClient<Boat> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};
    use crate::validation::ResourceKind;

    #[tokio::test]
    async fn moor_sends_the_moor_action() {
        let (client, mut receiver) = create_mock_client::<Boat>(10);
        let boat_client = BoatClient::new(client);
        let key = ResourceKey::new(ResourceKind::Boat, 1);

        let task = tokio::spawn(async move { boat_client.moor(key).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, key);
        assert!(matches!(action, BoatAction::Moor));
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn moor_surfaces_already_docked() {
        let (client, mut receiver) = create_mock_client::<Boat>(10);
        let boat_client = BoatClient::new(client);
        let key = ResourceKey::new(ResourceKind::Boat, 1);

        let task = tokio::spawn(async move { boat_client.moor(key).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(ActorError::Entity(BoatError::AlreadyDocked(key))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, ActorError::Entity(BoatError::AlreadyDocked(key)));
    }
}
