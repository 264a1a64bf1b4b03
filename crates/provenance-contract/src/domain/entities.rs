//! # Core Domain Entities
//!
//! The provenance record itself: a typed, fixed-schema document stored as
//! JSON under a single key in host world state. An explicit struct (rather
//! than an untyped map) makes the wire schema part of the type: fields
//! cannot be silently dropped or mis-typed at construction.

use crate::domain::value_objects::ClientId;
use crate::errors::ContractError;
use serde::{Deserialize, Serialize};

// =============================================================================
// PROVENANCE RECORD
// =============================================================================

/// A provenance record for one product.
///
/// Field order matters: serialization must produce the wire shape
/// `{uri, hash, timestamp, version, owners}` expected by downstream
/// consumers, and `serde_json` emits struct fields in declaration order.
///
/// All string fields are caller-supplied and deliberately unvalidated:
/// `uri` is an opaque locator, `hash` an opaque content digest, and
/// `timestamp` is never parsed against a clock. The ledger records what
/// the caller claims; auditing those claims is out of scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Opaque resource locator (e.g. an IPFS URI).
    pub uri: String,
    /// Caller-supplied content hash, not recomputed here.
    pub hash: String,
    /// Caller-supplied creation timestamp, stored verbatim.
    pub timestamp: String,
    /// Schema/record version. Always 0 at creation; no operation in this
    /// contract increments it.
    pub version: u64,
    /// Owner identities in declaration order, creator appended last.
    /// Duplicates are preserved (append-only audit trail).
    pub owners: Vec<String>,
}

impl ProvenanceRecord {
    /// Record version assigned at creation.
    pub const INITIAL_VERSION: u64 = 0;

    /// Builds a new record from caller-supplied fields, appending the
    /// resolved client identity to the owners list.
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        hash: impl Into<String>,
        timestamp: impl Into<String>,
        mut owners: Vec<String>,
        creator: &ClientId,
    ) -> Self {
        owners.push(creator.as_str().to_string());
        Self {
            uri: uri.into(),
            hash: hash.into(),
            timestamp: timestamp.into(),
            version: Self::INITIAL_VERSION,
            owners,
        }
    }

    /// Serializes the record to its canonical JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Serialization`] if encoding fails. The
    /// original chaincode discarded this error; here it aborts the
    /// transaction.
    pub fn to_json(&self) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self).map_err(|e| ContractError::Serialization(e.to_string()))
    }

    /// Decodes a record from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Serialization`] if the bytes are not a
    /// well-formed record document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes).map_err(|e| ContractError::Serialization(e.to_string()))
    }

    /// Returns the identity that created this record, if the owners list
    /// is non-empty. By construction the creator is the last entry.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        self.owners.last().map(String::as_str)
    }
}

// =============================================================================
// TESTS
// =============================================================================
