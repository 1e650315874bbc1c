//! Shared client behavior.

use crate::framework::{ActorEntity, ActorError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete
/// operations.
///
/// Reduces boilerplate: wrappers only implement `inner()` and get typed
/// `get`/`list`/`delete` for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError<T::Error>> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// List all entities in the resource's defined order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, ActorError<T::Error>> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), ActorError<T::Error>> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
