//! # Invocation Router
//!
//! Maps the host's string-routed invocations onto the typed contract
//! operations. This adapter plays the role the `contractapi` shim plays
//! for Go chaincode: name matching, arity checks, and encoding typed
//! results back into opaque payload bytes.

use crate::errors::InvocationError;
use crate::ports::inbound::{transaction_names, ChaincodeInvoke, InvokeResponse};
use crate::ports::outbound::TransactionContext;
use crate::service::ProvenanceContract;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// String-routed dispatch over a [`ProvenanceContract`].
pub struct InvocationRouter {
    /// The contract handling routed operations.
    contract: Arc<ProvenanceContract>,
}

impl InvocationRouter {
    /// Creates a router over an existing contract handler.
    #[must_use]
    pub fn new(contract: Arc<ProvenanceContract>) -> Self {
        Self { contract }
    }

    /// The underlying contract handler.
    #[must_use]
    pub fn contract(&self) -> &ProvenanceContract {
        &self.contract
    }

    fn expect_arity(
        function: &str,
        args: &[String],
        expected: usize,
    ) -> Result<(), InvocationError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(InvocationError::BadArity {
                function: function.to_string(),
                expected,
                actual: args.len(),
            })
        }
    }
}

#[async_trait]
impl ChaincodeInvoke for InvocationRouter {
    async fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<InvokeResponse, InvocationError> {
        // Correlation id ties the routed operation's log lines together.
        let tx_id = Uuid::new_v4();
        debug!(%tx_id, function, argc = args.len(), "routing invocation");

        match function {
            transaction_names::INIT_LEDGER => {
                Self::expect_arity(function, args, 0)?;
                self.contract.init_ledger(ctx).await?;
                Ok(InvokeResponse::empty())
            }

            transaction_names::RESOURCE_EXISTS => {
                Self::expect_arity(function, args, 1)?;
                let exists = self.contract.resource_exists(ctx, &args[0]).await?;
                Ok(InvokeResponse::from_bytes(
                    if exists { b"true".to_vec() } else { b"false".to_vec() },
                ))
            }

            transaction_names::CREATE_PROV => {
                Self::expect_arity(function, args, 5)?;
                self.contract
                    .create_provenance_record(
                        ctx, &args[0], &args[1], &args[2], &args[3], &args[4],
                    )
                    .await?;
                Ok(InvokeResponse::empty())
            }

            transaction_names::READ_PROV => {
                Self::expect_arity(function, args, 1)?;
                let json = self.contract.read_provenance_record(ctx, &args[0]).await?;
                Ok(InvokeResponse::from_bytes(json.into_bytes()))
            }

            transaction_names::READ_ALL_PROV => {
                Self::expect_arity(function, args, 0)?;
                let json = self.contract.read_all_provenance_records(ctx).await?;
                Ok(InvokeResponse::from_bytes(json.into_bytes()))
            }

            unknown => {
                warn!(%tx_id, function = unknown, "unknown transaction name");
                Err(InvocationError::UnknownFunction(unknown.to_string()))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
