//! # Driving Ports (API - Inbound)
//!
//! The interface the host runtime uses to call into the contract: a
//! string-routed `invoke` carrying the transaction name and arguments,
//! the role `contractapi` plays for Go chaincode.

use crate::errors::InvocationError;
use crate::ports::outbound::TransactionContext;
use async_trait::async_trait;

// =============================================================================
// TRANSACTION NAMES
// =============================================================================

/// Transaction names exposed through the host's invocation interface.
///
/// The `HLF_` prefixed names are part of the deployed wire contract and
/// must not change without a coordinated client update.
pub mod transaction_names {
    /// Bootstrap hook, no arguments.
    pub const INIT_LEDGER: &str = "InitLedger";

    /// Existence check: `(pid)`.
    pub const RESOURCE_EXISTS: &str = "ResourceExists";

    /// Guarded insert: `(pid, uri, hash, timestamp, ownersJSON)`.
    pub const CREATE_PROV: &str = "HLF_CreateProv";

    /// Existence-checked read: `(key)`.
    pub const READ_PROV: &str = "HLF_ReadProv";

    /// Full range read, no arguments.
    pub const READ_ALL_PROV: &str = "HLF_ReadAllProv";
}

// =============================================================================
// INVOKE RESPONSE
// =============================================================================

/// Result payload of a successful invocation.
///
/// The host treats chaincode output as opaque bytes; typed results
/// (booleans, JSON documents) are encoded into `payload` by the router.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InvokeResponse {
    /// Raw response bytes. Empty for operations with no return value.
    pub payload: Vec<u8>,
}

impl InvokeResponse {
    /// An empty response (operations returning nothing).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A response carrying raw bytes.
    #[must_use]
    pub fn from_bytes(payload: Vec<u8>) -> Self {
        Self { payload }
    }

    /// Interprets the payload as UTF-8, lossily.
    #[must_use]
    pub fn as_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

// =============================================================================
// CHAINCODE INVOKE (Primary Driving Port)
// =============================================================================

/// String-routed chaincode entry point.
///
/// ## Exposed transaction names
///
/// | Name | Arguments | Payload |
/// |------|-----------|---------|
/// | `InitLedger` | (none) | empty |
/// | `ResourceExists` | `pid` | `"true"` / `"false"` |
/// | `HLF_CreateProv` | `pid, uri, hash, timestamp, ownersJSON` | empty |
/// | `HLF_ReadProv` | `key` | raw record JSON |
/// | `HLF_ReadAllProv` | (none) | JSON array of records |
#[async_trait]
pub trait ChaincodeInvoke: Send + Sync {
    /// Route one transaction to the matching contract operation.
    ///
    /// # Errors
    ///
    /// * [`InvocationError::UnknownFunction`] - no such transaction name
    /// * [`InvocationError::BadArity`] - wrong argument count
    /// * [`InvocationError::Contract`] - the operation itself failed
    async fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<InvokeResponse, InvocationError>;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_response_helpers() {
        assert!(InvokeResponse::empty().payload.is_empty());

        let resp = InvokeResponse::from_bytes(b"true".to_vec());
        assert_eq!(resp.as_utf8_lossy(), "true");
    }
}
