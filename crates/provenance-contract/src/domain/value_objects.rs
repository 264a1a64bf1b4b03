//! # Value Objects
//!
//! Immutable domain primitives for the provenance contract.
//! These types are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRODUCT ID
// =============================================================================

/// Product/resource identifier, the sole lookup key for a provenance
/// record in world state.
///
/// The value is caller-supplied and opaque: no format, charset, or length
/// is enforced, matching the flat key space of the host store.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product identifier from any string-like value.
    #[must_use]
    pub fn new(pid: impl Into<String>) -> Self {
        Self(pid.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    ///
    /// An empty key is legal for the store but never useful; callers may
    /// use this to log suspicious invocations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(pid: &str) -> Self {
        Self::new(pid)
    }
}

impl From<String> for ProductId {
    fn from(pid: String) -> Self {
        Self(pid)
    }
}

// =============================================================================
// CLIENT ID
// =============================================================================

/// Resolved identity string of the invoking client.
///
/// On a real peer this is the base64 x509 subject/issuer pair the host
/// identity service reports; the contract treats it as opaque and only
/// ever appends it to the owners list.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a client identity from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identity, yielding the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientId({})", self.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
