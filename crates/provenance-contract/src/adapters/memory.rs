//! # In-Memory Adapters
//!
//! Test/dev implementations of the outbound ports. Production state,
//! identity, and event delivery live in the host peer; these adapters
//! exist so the contract can be exercised without one.

use crate::domain::value_objects::ClientId;
use crate::errors::{EventError, IdentityError, StateError};
use crate::events::ChaincodeEvent;
use crate::ports::outbound::{EventEmitter, IdentityResolver, TransactionContext, WorldState};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

// =============================================================================
// IN-MEMORY LEDGER
// =============================================================================

/// `BTreeMap`-backed world state.
///
/// Ordered keys make range reads behave like the host's range queries.
/// A failure can be injected to exercise the backend-error paths.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    injected_failure: RwLock<Option<StateError>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, bypassing failure injection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Returns all stored keys in order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().unwrap().keys().cloned().collect()
    }

    /// Seeds a value directly, bypassing the contract.
    pub fn seed(&self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.write().unwrap().insert(key.into(), value);
    }

    /// Makes every subsequent state operation fail with `err`.
    pub fn fail_with(&self, err: StateError) {
        *self.injected_failure.write().unwrap() = Some(err);
    }

    /// Clears any injected failure.
    pub fn heal(&self) {
        *self.injected_failure.write().unwrap() = None;
    }

    fn check_failure(&self) -> Result<(), StateError> {
        match self.injected_failure.read().unwrap().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WorldState for InMemoryLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        self.check_failure()?;
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        self.check_failure()?;
        self.entries.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn get_state_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        self.check_failure()?;
        let entries = self.entries.read().unwrap();
        let iter: Box<dyn Iterator<Item = (&String, &Vec<u8>)> + '_> = if end.is_empty() {
            Box::new(entries.range(start.to_string()..))
        } else {
            Box::new(entries.range(start.to_string()..end.to_string()))
        };
        Ok(iter.map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

// =============================================================================
// STATIC IDENTITY
// =============================================================================

/// Identity resolver returning a fixed client, or failing when none is
/// configured (to exercise the identity-resolution error path).
#[derive(Debug, Default)]
pub struct StaticIdentity {
    client: Option<ClientId>,
}

impl StaticIdentity {
    /// Resolver that always reports `client`.
    #[must_use]
    pub fn client(client: impl Into<String>) -> Self {
        Self {
            client: Some(ClientId::new(client)),
        }
    }

    /// Resolver with no identity attached.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }
}

impl IdentityResolver for StaticIdentity {
    fn client_id(&self) -> Result<ClientId, IdentityError> {
        self.client.clone().ok_or(IdentityError::Missing)
    }
}

// =============================================================================
// EVENT RECORDER
// =============================================================================

/// Event sink that captures emitted events for assertions.
///
/// A rejection can be injected to exercise the event-failure path.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RwLock<Vec<ChaincodeEvent>>,
    injected_rejection: RwLock<Option<EventError>>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<ChaincodeEvent> {
        self.events.read().unwrap().clone()
    }

    /// Makes every subsequent emission fail with `err`.
    pub fn reject_with(&self, err: EventError) {
        *self.injected_rejection.write().unwrap() = Some(err);
    }
}

impl EventEmitter for EventRecorder {
    fn set_event(&self, event: ChaincodeEvent) -> Result<(), EventError> {
        if let Some(err) = self.injected_rejection.read().unwrap().as_ref() {
            return Err(err.clone());
        }
        self.events.write().unwrap().push(event);
        Ok(())
    }
}

// =============================================================================
// MEMORY TRANSACTION CONTEXT
// =============================================================================

/// Transaction context bundling the three in-memory adapters.
#[derive(Debug, Default)]
pub struct MemoryTransactionContext {
    ledger: InMemoryLedger,
    identity: StaticIdentity,
    recorder: EventRecorder,
}

impl MemoryTransactionContext {
    /// Context whose invocations resolve to `client`.
    #[must_use]
    pub fn with_client(client: impl Into<String>) -> Self {
        Self {
            ledger: InMemoryLedger::new(),
            identity: StaticIdentity::client(client),
            recorder: EventRecorder::new(),
        }
    }

    /// Context with no resolvable client identity.
    #[must_use]
    pub fn without_client() -> Self {
        Self::default()
    }

    /// Direct access to the backing ledger.
    #[must_use]
    pub fn ledger(&self) -> &InMemoryLedger {
        &self.ledger
    }

    /// Direct access to the captured events.
    #[must_use]
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }
}

impl TransactionContext for MemoryTransactionContext {
    fn world_state(&self) -> &dyn WorldState {
        &self.ledger
    }

    fn identity(&self) -> &dyn IdentityResolver {
        &self.identity
    }

    fn events(&self) -> &dyn EventEmitter {
        &self.recorder
    }
}

// =============================================================================
// TESTS
// =============================================================================
