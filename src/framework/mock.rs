//! # Mock Framework
//!
//! Utilities for testing actors and clients in isolation.
//!
//! A [`MockClient`] stands in for a real [`ResourceActor`]: tests enqueue
//! expectations (`expect_get`, `expect_action`, ...) with canned responses,
//! hand the resulting [`ResourceClient`] to the code under test, and call
//! [`MockClient::verify`] at the end to assert every expectation was consumed.

use crate::framework::{ActorEntity, ActorError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request together with the response the mock should return.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, ActorError<T::Error>>,
    },
    List {
        response: Result<Vec<T>, ActorError<T::Error>>,
    },
    Create {
        response: Result<T, ActorError<T::Error>>,
    },
    Update {
        response: Result<T, ActorError<T::Error>>,
    },
    Delete {
        response: Result<(), ActorError<T::Error>>,
    },
    Action {
        response: Result<T::ActionResult, ActorError<T::Error>>,
    },
}

/// A mock client with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Boat>::new();
/// mock.expect_get().return_ok(Some(boat));
/// let client = BoatClient::new(mock.client());
/// // exercise the code under test ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering each request with the next expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();
                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("MockClient: unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_get }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_list }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_create }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_update }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_delete }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder { mock: self, wrap: Expectation::make_action }
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Expectation<T> {
    fn make_get(response: Result<Option<T>, ActorError<T::Error>>) -> Self {
        Expectation::Get { response }
    }
    fn make_list(response: Result<Vec<T>, ActorError<T::Error>>) -> Self {
        Expectation::List { response }
    }
    fn make_create(response: Result<T, ActorError<T::Error>>) -> Self {
        Expectation::Create { response }
    }
    fn make_update(response: Result<T, ActorError<T::Error>>) -> Self {
        Expectation::Update { response }
    }
    fn make_delete(response: Result<(), ActorError<T::Error>>) -> Self {
        Expectation::Delete { response }
    }
    fn make_action(response: Result<T::ActionResult, ActorError<T::Error>>) -> Self {
        Expectation::Action { response }
    }
}

/// Builder finalizing one expectation with its canned response.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, ActorError<T::Error>>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<'_, T, R> {
    /// Queues a successful response.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    /// Queues an error response.
    pub fn return_err(self, error: ActorError<T::Error>) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a bare client plus the receiver for asserting raw requests.
///
/// Useful when a test wants to inspect the exact message a client sends
/// (payload contents, action variant) rather than just scripting responses.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next message and asserts it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, crate::framework::Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, crate::framework::Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}
