//! # Core Actor Framework
//!
//! Generic building blocks for resource-oriented actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: the trait a resource type implements to be managed.
//! - [`ResourceActor`]: the generic actor owning the entity store.
//! - [`ResourceClient`]: the typed client for talking to an actor.
//! - [`ActorError`]: transport-level errors wrapping the entity's own error type.
//!
//! ## Concurrency Model
//!
//! Each `ResourceActor` runs in its own Tokio task and processes messages
//! sequentially, awaiting every handler to completion before receiving the
//! next message. The store needs no locks, and any check-then-write sequence
//! inside a single handler (occupancy checks, uniqueness scans) is atomic
//! with respect to every other request against the same actor.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// Associated types keep every operation fully typed: a Boat actor can only
/// ever be sent Boat payloads, and its failures surface as Boat errors. The
/// `Context` type carries runtime dependencies (other clients) injected into
/// the hooks when the actor starts — use `()` when there are none.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// The payload for partial updates.
    type UpdateParams: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into hooks.
    type Context: Send + Sync;

    /// Domain error type surfaced from hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Constructs the entity from its assigned id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Checks whether this entity can coexist with an already-stored peer.
    ///
    /// Called by the actor for every existing entity before an insert or a
    /// committed update, inside the same message handler, so uniqueness
    /// constraints are enforced without a race window.
    fn conflicts_with(&self, _other: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Ordering used by the `List` operation. The default leaves order unspecified.
    fn list_order(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called on an update request; applies the partial payload.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Transport-level errors, parameterized over the entity's domain error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ActorError<E: std::error::Error> {
    /// The actor's channel is closed; the system is shutting down.
    #[error("actor closed")]
    Closed,

    /// The actor dropped the response channel without answering.
    #[error("actor dropped response channel")]
    Dropped,

    /// No entity exists under the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A domain-level failure reported by the entity's hooks.
    #[error(transparent)]
    Entity(E),
}

/// One-shot response channel carried inside each request.
pub type Response<T, E> = oneshot::Sender<Result<T, ActorError<E>>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the standard resource lifecycle — Create, Get, List,
/// Update, Delete — plus an `Action` variant for domain operations that do
/// not fit the CRUD model (mooring, occupancy transitions).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// Owns the store and the receiver end of the channel. State is only ever
/// touched from the actor's own task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Scans the store for a peer that conflicts with `candidate`.
    fn find_conflict(&self, candidate: &T, skip: Option<&T::Id>) -> Result<(), T::Error> {
        for (id, other) in &self.store {
            if skip.is_some_and(|s| s == id) {
                continue;
            }
            candidate.conflicts_with(other)?;
        }
        Ok(())
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook, allowing
    /// entities to reach dependencies (other clients) wired after the actor
    /// was constructed but before the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    let item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(ActorError::Entity(e)));
                            continue;
                        }
                    };
                    if let Err(e) = self.find_conflict(&item, None) {
                        warn!(entity_type, %id, error = %e, "Create conflict");
                        let _ = respond_to.send(Err(ActorError::Entity(e)));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by(T::list_order);
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                        continue;
                    };
                    // Mutate a copy so a failed hook or conflict leaves the
                    // stored entity untouched.
                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(ActorError::Entity(e)));
                        continue;
                    }
                    if let Err(e) = self.find_conflict(&item, Some(&id)) {
                        warn!(entity_type, %id, error = %e, "Update conflict");
                        let _ = respond_to.send(Err(ActorError::Entity(e)));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(ActorError::Entity(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(ActorError::Entity);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, ActorError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(
        &self,
        id: T::Id,
        update: T::UpdateParams,
    ) -> Result<T, ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ActorError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
