//! # Provenance Contract
//!
//! The transaction handler: five operations over a host-provided
//! transaction context. The handler holds no ledger state of its own;
//! every call receives the context explicitly, and the host's MVCC and
//! ordering pipeline own isolation between concurrent transactions.
//!
//! ## Write path ordering
//!
//! `create_provenance_record` queues the state write first and the
//! `ResourceCreated` event second. The host applies both atomically on
//! commit, so the order is unobservable on success; an event failure
//! aborts the transaction with its own error kind rather than being
//! misreported as a serialization failure.

use crate::domain::entities::ProvenanceRecord;
use crate::domain::invariants::check_record_invariants;
use crate::domain::services::parse_owners;
use crate::domain::value_objects::ProductId;
use crate::errors::ContractError;
use crate::events::ChaincodeEvent;
use crate::ports::outbound::TransactionContext;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// CONTRACT STATS
// =============================================================================

/// In-process counters for the contract's lifetime inside one chaincode
/// container. Diagnostic only; never persisted to the ledger.
#[derive(Debug, Default, Clone)]
pub struct ContractStats {
    /// Successful record creations.
    pub records_created: u64,
    /// Successful record reads (single-key and range).
    pub records_read: u64,
    /// Existence checks served.
    pub existence_checks: u64,
    /// Transactions that ended in an error.
    pub failed_transactions: u64,
}

// =============================================================================
// PROVENANCE CONTRACT
// =============================================================================

/// Stateless provenance-record transaction handler.
///
/// One instance serves every invocation dispatched by the host; the only
/// in-process state is the diagnostic counter block.
#[derive(Debug, Default)]
pub struct ProvenanceContract {
    /// Diagnostic counters.
    stats: Arc<RwLock<ContractStats>>,
}

impl ProvenanceContract {
    /// Creates a new contract handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the diagnostic counters.
    pub async fn stats(&self) -> ContractStats {
        self.stats.read().await.clone()
    }

    async fn record_failure(&self) {
        self.stats.write().await.failed_transactions += 1;
    }

    /// Ledger bootstrap hook. Intentionally a no-op: this contract seeds
    /// no initial records, but the transaction name stays exposed so
    /// deployment tooling can call it unconditionally.
    #[instrument(skip(self, _ctx))]
    pub async fn init_ledger(&self, _ctx: &dyn TransactionContext) -> Result<(), ContractError> {
        info!("ledger initialized (no bootstrap records)");
        Ok(())
    }

    /// Checks whether a non-empty record is stored under `pid`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::State`] if the backend query itself fails;
    /// an absent key is `Ok(false)`, never an error.
    #[instrument(skip(self, ctx))]
    pub async fn resource_exists(
        &self,
        ctx: &dyn TransactionContext,
        pid: &str,
    ) -> Result<bool, ContractError> {
        let exists = match ctx.world_state().has_state(pid).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(error = %e, "existence check failed");
                self.record_failure().await;
                return Err(e.into());
            }
        };

        self.stats.write().await.existence_checks += 1;
        debug!(pid, exists, "existence check");
        Ok(exists)
    }

    /// Creates a provenance record under `pid`.
    ///
    /// Guarded insert: fails if `pid` already holds a record, if
    /// `owners_json` is not a JSON array of strings, or if the caller's
    /// identity cannot be resolved. On success the serialized record is
    /// written to world state and a `ResourceCreated` event carrying the
    /// same bytes is queued; both take effect only on commit.
    ///
    /// # Errors
    ///
    /// * [`ContractError::DuplicateKey`] - `pid` already exists
    /// * [`ContractError::MalformedOwners`] - unparseable owners list
    /// * [`ContractError::Identity`] - caller identity unavailable
    /// * [`ContractError::State`] - backend query/write failure
    /// * [`ContractError::Serialization`] - record encoding failure
    /// * [`ContractError::EventEmit`] - host rejected the event
    #[instrument(skip(self, ctx, uri, hash, timestamp, owners_json))]
    pub async fn create_provenance_record(
        &self,
        ctx: &dyn TransactionContext,
        pid: &str,
        uri: &str,
        hash: &str,
        timestamp: &str,
        owners_json: &str,
    ) -> Result<(), ContractError> {
        let result = self
            .create_record_inner(ctx, pid, uri, hash, timestamp, owners_json)
            .await;

        match &result {
            Ok(()) => {
                self.stats.write().await.records_created += 1;
                info!(pid, "provenance record created");
            }
            Err(e) => {
                warn!(pid, error = %e, "record creation failed");
                self.record_failure().await;
            }
        }
        result
    }

    async fn create_record_inner(
        &self,
        ctx: &dyn TransactionContext,
        pid: &str,
        uri: &str,
        hash: &str,
        timestamp: &str,
        owners_json: &str,
    ) -> Result<(), ContractError> {
        let pid = ProductId::new(pid);
        if pid.is_empty() {
            // Legal for the flat key space, but never useful.
            warn!("create invoked with empty product id");
        }

        // Caller input and identity are validated before anything is
        // queued, so a failing create leaves no observable state.
        if ctx.world_state().has_state(pid.as_str()).await? {
            return Err(ContractError::DuplicateKey {
                pid: pid.to_string(),
            });
        }

        let owners = parse_owners(owners_json)?;
        let creator = ctx.identity().client_id()?;

        let record = ProvenanceRecord::new(uri, hash, timestamp, owners, &creator);
        debug_assert!(check_record_invariants(&record, &creator));

        let bytes = record.to_json()?;
        ctx.world_state().put_state(pid.as_str(), bytes.clone()).await?;
        ctx.events()
            .set_event(ChaincodeEvent::new(crate::events::event_names::RESOURCE_CREATED, bytes))?;

        Ok(())
    }

    /// Reads the raw serialized record stored under `key`.
    ///
    /// The JSON is returned unparsed; interpreting it is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// * [`ContractError::NotFound`] - no record under `key`
    /// * [`ContractError::State`] - backend query failure
    /// * [`ContractError::Serialization`] - stored bytes are not UTF-8
    #[instrument(skip(self, ctx))]
    pub async fn read_provenance_record(
        &self,
        ctx: &dyn TransactionContext,
        key: &str,
    ) -> Result<String, ContractError> {
        let result = self.read_record_inner(ctx, key).await;

        match &result {
            Ok(_) => {
                self.stats.write().await.records_read += 1;
                debug!(key, "provenance record read");
            }
            Err(e) => {
                warn!(key, error = %e, "record read failed");
                self.record_failure().await;
            }
        }
        result
    }

    async fn read_record_inner(
        &self,
        ctx: &dyn TransactionContext,
        key: &str,
    ) -> Result<String, ContractError> {
        let bytes = ctx
            .world_state()
            .get_state(key)
            .await?
            .ok_or_else(|| ContractError::NotFound {
                key: key.to_string(),
            })?;

        String::from_utf8(bytes).map_err(|e| ContractError::Serialization(e.to_string()))
    }

    /// Reads every record in world state, returned as a JSON array.
    ///
    /// Values that do not parse as JSON are carried through as plain
    /// strings rather than failing the whole scan. An empty world state
    /// yields `[]`.
    ///
    /// # Errors
    ///
    /// * [`ContractError::State`] - backend range query failure
    /// * [`ContractError::Serialization`] - result array encoding failure
    #[instrument(skip(self, ctx))]
    pub async fn read_all_provenance_records(
        &self,
        ctx: &dyn TransactionContext,
    ) -> Result<String, ContractError> {
        let entries = match ctx.world_state().get_state_range("", "").await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "range read failed");
                self.record_failure().await;
                return Err(e.into());
            }
        };

        let mut all: Vec<serde_json::Value> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match serde_json::from_slice(&value) {
                Ok(parsed) => all.push(parsed),
                Err(e) => {
                    debug!(key = %key, error = %e, "stored value is not JSON, passing through as string");
                    all.push(serde_json::Value::String(
                        String::from_utf8_lossy(&value).into_owned(),
                    ));
                }
            }
        }

        self.stats.write().await.records_read += 1;
        serde_json::to_string(&all).map_err(|e| ContractError::Serialization(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
