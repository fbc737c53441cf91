//! # Mock Gateway
//!
//! Utilities for testing view-models in isolation.
//!
//! [`MockGateway`] stands in for a REST gateway: tests queue up expected
//! calls with their canned responses, hand a clone to the view-model, and
//! afterwards assert on what actually happened.
//!
//! # Testing Strategy
//! Two assertions matter beyond the canned responses themselves:
//!
//! - [`MockGateway::calls`] records every gateway invocation, which is how a
//!   test proves a validation failure *never reached the network*.
//! - [`MockGateway::verify`] panics if queued expectations were never
//!   consumed, catching tests that silently skipped the interesting path.
//!
//! An unexpected call (empty queue, or a queued expectation of a different
//! kind) panics immediately with the offending operation.
//!
//! # Example
//! ```ignore
//! let mock = MockGateway::<Client>::new();
//! mock.expect_list().return_ok(vec![client(1)]);
//! mock.expect_create().return_err(TransportError::Network("down".into()));
//!
//! let (vm, handle) = FormViewModel::new(mock.clone(), 8);
//! tokio::spawn(vm.run());
//! // ... drive the handle ...
//! mock.verify();
//! ```

use crate::entity::FormEntity;
use crate::error::TransportError;
use crate::gateway::EntityGateway;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A recorded gateway invocation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    List,
    Fetch(u32),
    Create,
    Update(u32),
    Delete(u32),
}

enum Expectation<E: FormEntity> {
    List(Result<Vec<E>, TransportError>),
    Fetch(Result<E, TransportError>),
    Create(Result<E, TransportError>),
    Update(Result<E, TransportError>),
    Delete(Result<(), TransportError>),
}

impl<E: FormEntity> Expectation<E> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::List(_) => "list",
            Expectation::Fetch(_) => "fetch",
            Expectation::Create(_) => "create",
            Expectation::Update(_) => "update",
            Expectation::Delete(_) => "delete",
        }
    }
}

/// An [`EntityGateway`] test double with expectation tracking.
pub struct MockGateway<E: FormEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<E>>>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl<E: FormEntity> Clone for MockGateway<E> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<E: FormEntity> Default for MockGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FormEntity> MockGateway<E> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ListExpectation<E> {
        ListExpectation { mock: self.clone() }
    }

    /// Expects a `fetch` call.
    pub fn expect_fetch(&self) -> FetchExpectation<E> {
        FetchExpectation { mock: self.clone() }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> CreateExpectation<E> {
        CreateExpectation { mock: self.clone() }
    }

    /// Expects an `update` call.
    pub fn expect_update(&self) -> UpdateExpectation<E> {
        UpdateExpectation { mock: self.clone() }
    }

    /// Expects a `delete` call.
    pub fn expect_delete(&self) -> DeleteExpectation<E> {
        DeleteExpectation { mock: self.clone() }
    }

    /// Every gateway invocation so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn push(&self, expectation: Expectation<E>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    fn take(&self, call: GatewayCall) -> Expectation<E> {
        self.calls.lock().unwrap().push(call.clone());
        match self.expectations.lock().unwrap().pop_front() {
            Some(expectation) => expectation,
            None => panic!("unexpected gateway call {:?}: no expectation queued", call),
        }
    }
}

#[async_trait]
impl<E: FormEntity> EntityGateway<E> for MockGateway<E> {
    async fn list(&self, _scope: &E::Scope) -> Result<Vec<E>, TransportError> {
        match self.take(GatewayCall::List) {
            Expectation::List(response) => response,
            other => panic!("gateway call was list, expectation was {}", other.kind()),
        }
    }

    async fn fetch(&self, _scope: &E::Scope, id: u32) -> Result<E, TransportError> {
        match self.take(GatewayCall::Fetch(id)) {
            Expectation::Fetch(response) => response,
            other => panic!("gateway call was fetch, expectation was {}", other.kind()),
        }
    }

    async fn create(&self, _scope: &E::Scope, _draft: E::Draft) -> Result<E, TransportError> {
        match self.take(GatewayCall::Create) {
            Expectation::Create(response) => response,
            other => panic!("gateway call was create, expectation was {}", other.kind()),
        }
    }

    async fn update(
        &self,
        _scope: &E::Scope,
        id: u32,
        _draft: E::Draft,
    ) -> Result<E, TransportError> {
        match self.take(GatewayCall::Update(id)) {
            Expectation::Update(response) => response,
            other => panic!("gateway call was update, expectation was {}", other.kind()),
        }
    }

    async fn delete(&self, _scope: &E::Scope, id: u32) -> Result<(), TransportError> {
        match self.take(GatewayCall::Delete(id)) {
            Expectation::Delete(response) => response,
            other => panic!("gateway call was delete, expectation was {}", other.kind()),
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<E: FormEntity> {
    mock: MockGateway<E>,
}

impl<E: FormEntity> ListExpectation<E> {
    pub fn return_ok(self, items: Vec<E>) {
        self.mock.push(Expectation::List(Ok(items)));
    }

    pub fn return_err(self, error: TransportError) {
        self.mock.push(Expectation::List(Err(error)));
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectation<E: FormEntity> {
    mock: MockGateway<E>,
}

impl<E: FormEntity> FetchExpectation<E> {
    pub fn return_ok(self, item: E) {
        self.mock.push(Expectation::Fetch(Ok(item)));
    }

    pub fn return_err(self, error: TransportError) {
        self.mock.push(Expectation::Fetch(Err(error)));
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<E: FormEntity> {
    mock: MockGateway<E>,
}

impl<E: FormEntity> CreateExpectation<E> {
    pub fn return_ok(self, created: E) {
        self.mock.push(Expectation::Create(Ok(created)));
    }

    pub fn return_err(self, error: TransportError) {
        self.mock.push(Expectation::Create(Err(error)));
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<E: FormEntity> {
    mock: MockGateway<E>,
}

impl<E: FormEntity> UpdateExpectation<E> {
    pub fn return_ok(self, updated: E) {
        self.mock.push(Expectation::Update(Ok(updated)));
    }

    pub fn return_err(self, error: TransportError) {
        self.mock.push(Expectation::Update(Err(error)));
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<E: FormEntity> {
    mock: MockGateway<E>,
}

impl<E: FormEntity> DeleteExpectation<E> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Delete(Ok(())));
    }

    pub fn return_err(self, error: TransportError) {
        self.mock.push(Expectation::Delete(Err(error)));
    }
}
