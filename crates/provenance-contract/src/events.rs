//! # Chaincode Events
//!
//! Event types queued through the host for post-commit delivery.
//!
//! A chaincode event is a named blob attached to the transaction; the
//! host delivers it to subscribers only if the transaction commits. This
//! contract emits exactly one event kind: `ResourceCreated`, whose
//! payload is the serialized record that was written (byte-identical, so
//! subscribers see exactly what landed in world state).

use serde::{Deserialize, Serialize};

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Event names emitted by this contract.
pub mod event_names {
    /// Emitted once per successful record creation.
    pub const RESOURCE_CREATED: &str = "ResourceCreated";
}

// =============================================================================
// CHAINCODE EVENT
// =============================================================================

/// A named event queued for post-commit delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeEvent {
    /// Event name, matched by subscribers.
    pub name: String,
    /// Opaque payload bytes (for this contract, record JSON).
    pub payload: Vec<u8>,
}

impl ChaincodeEvent {
    /// Creates an event with the given name and payload.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
