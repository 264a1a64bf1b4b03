//! # Error Types
//!
//! All error types for provenance chaincode execution.
//!
//! Every error surfaces to the host runtime as the transaction's failure
//! result. The host is all-or-nothing: any error here aborts the whole
//! proposed write set, so there is no local recovery or retry.

use thiserror::Error;

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from world-state access operations.
///
/// These describe a failing backend query or write, which is distinct from
/// "key not found" (an absent key is a successful query with no value).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The backend store reported a failure.
    #[error("world state backend error: {0}")]
    Backend(String),

    /// Connection to the world-state store lost.
    #[error("world state unavailable")]
    Unavailable,

    /// World-state access timed out.
    #[error("world state access timeout")]
    Timeout,
}

// =============================================================================
// IDENTITY ERRORS
// =============================================================================

/// Errors resolving the invoking client's identity from the
/// transaction context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// No identity material is attached to the invocation.
    #[error("no client identity in transaction context")]
    Missing,

    /// Identity material is present but cannot be decoded.
    #[error("malformed client identity: {0}")]
    Malformed(String),
}

// =============================================================================
// EVENT ERRORS
// =============================================================================

/// Errors queueing a chaincode event for delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The host rejected the event.
    #[error("event rejected by host: {0}")]
    Rejected(String),
}

// =============================================================================
// CONTRACT ERRORS
// =============================================================================

/// Transaction-level errors for the provenance contract operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// World-state query or write failed.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Create on a key that already holds a record.
    #[error("resource with PID '{pid}' already exists")]
    DuplicateKey {
        /// The product identifier that was already taken.
        pid: String,
    },

    /// The caller-supplied owners list is not a JSON array of strings.
    #[error("failed to parse owners list: {0}")]
    MalformedOwners(String),

    /// The invoking client's identity could not be resolved.
    #[error("failed to resolve client identity: {0}")]
    Identity(#[from] IdentityError),

    /// Read on a key with no stored record.
    #[error("key '{key}' does not exist in the world state")]
    NotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Record (de)serialization failed.
    #[error("failed to serialize resource: {0}")]
    Serialization(String),

    /// Event emission failed after the state write was queued.
    #[error("failed to emit event: {0}")]
    EventEmit(#[from] EventError),
}

impl ContractError {
    /// Returns true if this error means the requested key was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error is caused by caller input rather than
    /// the host environment.
    #[must_use]
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::MalformedOwners(_) | Self::NotFound { .. }
        )
    }
}

// =============================================================================
// INVOCATION ERRORS
// =============================================================================

/// Errors from the string-routed invocation layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// No transaction with the given name is exposed by the contract.
    #[error("unknown function: '{0}'")]
    UnknownFunction(String),

    /// Wrong number of arguments for the named transaction.
    #[error("function '{function}' expects {expected} argument(s), got {actual}")]
    BadArity {
        /// The transaction name that was invoked.
        function: String,
        /// Number of arguments the transaction takes.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// The routed operation itself failed.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_display() {
        let err = ContractError::DuplicateKey {
            pid: "item-1".to_string(),
        };
        assert_eq!(err.to_string(), "resource with PID 'item-1' already exists");

        let err = ContractError::NotFound {
            key: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "key 'missing' does not exist in the world state"
        );
    }

    #[test]
    fn test_state_error_conversion() {
        let state_err = StateError::Timeout;
        let err: ContractError = state_err.into();
        assert!(matches!(err, ContractError::State(StateError::Timeout)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_identity_error_conversion() {
        let err: ContractError = IdentityError::Missing.into();
        assert!(matches!(err, ContractError::Identity(_)));
        assert!(!err.is_caller_fault());
    }

    #[test]
    fn test_caller_fault_classification() {
        assert!(ContractError::MalformedOwners("bad".to_string()).is_caller_fault());
        assert!(ContractError::NotFound {
            key: "k".to_string()
        }
        .is_caller_fault());
        assert!(!ContractError::State(StateError::Unavailable).is_caller_fault());
        assert!(!ContractError::EventEmit(EventError::Rejected("full".to_string())).is_caller_fault());
    }

    #[test]
    fn test_invocation_error_display() {
        let err = InvocationError::BadArity {
            function: "HLF_CreateProv".to_string(),
            expected: 5,
            actual: 2,
        };
        assert!(err.to_string().contains("expects 5"));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_invocation_error_transparent() {
        let inner = ContractError::NotFound {
            key: "k".to_string(),
        };
        let err: InvocationError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}
