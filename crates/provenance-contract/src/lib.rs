//! # Provenance Contract - Ledger Transaction Handler
//!
//! ## Purpose
//!
//! Chaincode for product provenance records on a Fabric-style ledger:
//! an existence-guarded insert keyed by product identifier, a raw read,
//! and a full range read. Consensus, endorsement, ordering, and the
//! world-state store itself belong to the host peer runtime; this crate
//! only defines the per-invocation transaction logic that runs inside it.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | At-most-once creation per PID | `service.rs` - existence guard in `create_record_inner()` |
//! | INVARIANT-2 | Creator appended last to owners | `domain/entities.rs` - `ProvenanceRecord::new()` |
//! | INVARIANT-3 | Version 0 at creation, never mutated | `domain/entities.rs` - `INITIAL_VERSION`, no update path |
//! | INVARIANT-4 | Failed create leaves no observable state | `service.rs` - input validation before any queued write |
//!
//! ## Architecture
//!
//! Hexagonal: the contract (`service.rs`) is pure transaction logic over
//! outbound ports; host capabilities arrive through a per-invocation
//! `TransactionContext`.
//!
//! | Layer | Location | Purpose |
//! |-------|----------|---------|
//! | Domain | `domain/` | Record type, value objects, pure helpers |
//! | Ports | `ports/` | `WorldState`, `IdentityResolver`, `EventEmitter`, `ChaincodeInvoke` |
//! | Adapters | `adapters/` | In-memory test doubles, invocation router |
//! | Handler | `service.rs` | The five contract operations |
//!
//! ## Usage Example
//!
//! ```ignore
//! use provenance_contract::prelude::*;
//!
//! let router = InvocationRouter::new(Arc::new(ProvenanceContract::new()));
//! let resp = router.invoke(&ctx, "HLF_ReadProv", &["item-1".into()]).await?;
//! println!("{}", resp.as_utf8_lossy());
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::ProvenanceRecord;
    pub use crate::domain::invariants::{
        check_creator_appended, check_initial_version, check_record_invariants,
    };
    pub use crate::domain::services::parse_owners;
    pub use crate::domain::value_objects::{ClientId, ProductId};

    // Ports
    pub use crate::ports::inbound::{transaction_names, ChaincodeInvoke, InvokeResponse};
    pub use crate::ports::outbound::{
        EventEmitter, IdentityResolver, TransactionContext, WorldState,
    };

    // Events
    pub use crate::events::{event_names, ChaincodeEvent};

    // Errors
    pub use crate::errors::{
        ContractError, EventError, IdentityError, InvocationError, StateError,
    };

    // Adapters
    pub use crate::adapters::{
        EventRecorder, InMemoryLedger, InvocationRouter, MemoryTransactionContext, StaticIdentity,
    };

    // Handler
    pub use crate::service::{ContractStats, ProvenanceContract};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract name, as registered with deployment tooling.
pub const CONTRACT_NAME: &str = "ProvenanceContract";

// =============================================================================
// TESTS
// =============================================================================
