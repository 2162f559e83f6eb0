//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of canned responses instead of a running actor. It lets you test logic that
//! *uses* a client (for example an entity's `on_create` hook calling another actor) without
//! spawning the dependency.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Client Logic Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Dish { id: u32, name: String }
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Clone, Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Action = DishAction;
//!     type ActionResult = (); type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_get(1).return_ok(Some(Dish { id: 1, name: "Soup".into() }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().name, "Soup");
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Actor with Mocked Dependencies</b></summary>
//!
//! Run the real actor under test and inject a mocked client as its context. See
//! `tests/ledger_actor_test.rs` in the `outlet-service` crate, where the order ledger runs
//! for real and the catalog it validates against is a `MockClient`.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full System Integration Test</b></summary>
//!
//! Spin up every actor through the system orchestrator. See `tests/integration_test.rs`
//! in the `outlet-service` crate.
//! </details>
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, and the `expect_*`
//! functions pull the next request off it so a test can inspect the payload and answer by
//! hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Upserted};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client and its canned answer.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Upsert {
        response: Result<Upserted<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Broadcast {
        response: Result<Vec<(T::Id, T::ActionResult)>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation (wrong kind, or a `get` for a different id) panics the mock
/// task, which surfaces in the test as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Upsert { respond_to, .. },
                        Some(Expectation::Upsert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Broadcast { respond_to, .. },
                        Some(Expectation::Broadcast { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
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

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `upsert` operation.
    pub fn expect_upsert(&mut self) -> ExpectationBuilder<T, Upserted<T>> {
        self.builder(|response| Expectation::Upsert { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `broadcast` operation.
    pub fn expect_broadcast(&mut self) -> ExpectationBuilder<T, Vec<(T::Id, T::ActionResult)>> {
        self.builder(|response| Expectation::Broadcast { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Fluent builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Instead of spinning up a `ResourceActor`, the test reads requests from `receiver`,
/// asserts on them, and answers through the oneshot sender each one carries. This lets a
/// test simulate success, failure or delay deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Upsert request
pub async fn expect_upsert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<Upserted<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Broadcast request
pub async fn expect_broadcast<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<Vec<(T::Id, T::ActionResult)>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Broadcast { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
