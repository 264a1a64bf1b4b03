//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the contract depends on, all implemented by host adapters:
//!
//! - `WorldState`: the key/value world-state store
//! - `IdentityResolver`: the invoking client's identity
//! - `EventEmitter`: chaincode event delivery
//! - `TransactionContext`: per-invocation bundle of the three
//!
//! On a real peer these translate to shim calls (`GetState`/`PutState`,
//! `GetClientIdentity`, `SetEvent`). The contract never talks to storage,
//! the network, or certificates directly; dependencies point inward and
//! adapters implement these traits.

use crate::domain::value_objects::ClientId;
use crate::errors::{EventError, IdentityError, StateError};
use crate::events::ChaincodeEvent;
use async_trait::async_trait;

// =============================================================================
// WORLD STATE
// =============================================================================

/// Interface to the host-managed world state: a flat key -> bytes store
/// with no schema.
///
/// ## Implementation Notes
///
/// Writes are *proposed*: the host applies them only if the whole
/// transaction endorses and commits. Absent keys are `Ok(None)`, never an
/// error; `StateError` is reserved for a failing backend query.
#[async_trait]
pub trait WorldState: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - if a value is present
    /// * `None` - if the key has never been written (not an error)
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Queue a write of `value` under `key`.
    ///
    /// The write becomes durable only on transaction commit.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Get all key/value pairs in the half-open key range `[start, end)`.
    ///
    /// Both bounds empty means the full key space, matching the host
    /// shim's unbounded range query. Results are in lexicographic key
    /// order.
    async fn get_state_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<(String, Vec<u8>)>, StateError>;

    /// Check whether a non-empty value is stored under `key`.
    ///
    /// Convenience wrapper over `get_state`; an empty stored value counts
    /// as absent.
    async fn has_state(&self, key: &str) -> Result<bool, StateError> {
        Ok(matches!(self.get_state(key).await?, Some(v) if !v.is_empty()))
    }
}

// =============================================================================
// IDENTITY RESOLVER
// =============================================================================

/// Interface to the host's client-identity service.
///
/// The returned identity is opaque; the contract only appends it to the
/// owners list of a newly created record.
pub trait IdentityResolver: Send + Sync {
    /// Resolve the invoking client's identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if no identity is attached to the
    /// invocation or it cannot be decoded.
    fn client_id(&self) -> Result<ClientId, IdentityError>;
}

// =============================================================================
// EVENT EMITTER
// =============================================================================

/// Interface for queueing chaincode events.
///
/// At most one event survives per transaction on a real peer (a later
/// `set_event` overwrites an earlier one); this contract only ever emits
/// one. Delivery happens after commit and only for committed transactions.
pub trait EventEmitter: Send + Sync {
    /// Queue `event` for delivery on commit.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] if the host rejects the event.
    fn set_event(&self, event: ChaincodeEvent) -> Result<(), EventError>;
}

// =============================================================================
// TRANSACTION CONTEXT
// =============================================================================

/// Per-invocation bundle of the outbound ports.
///
/// The contract is stateless: every operation receives one of these as an
/// explicit parameter, the Rust equivalent of Fabric's
/// `TransactionContextInterface`.
pub trait TransactionContext: Send + Sync {
    /// The world-state store for this invocation.
    fn world_state(&self) -> &dyn WorldState;

    /// The identity service for this invocation.
    fn identity(&self) -> &dyn IdentityResolver;

    /// The event sink for this invocation.
    fn events(&self) -> &dyn EventEmitter;
}

// =============================================================================
// TESTS
// =============================================================================
