//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the ports:
//!
//! - `memory`: in-memory world state, fixed identity, and event recorder
//!   for tests and local development. On a real peer these concerns are
//!   served by the host shim.
//! - `router`: string-routed invocation adapter, mapping transaction
//!   names to the typed contract operations.

pub mod memory;
pub mod router;

pub use memory::{EventRecorder, InMemoryLedger, MemoryTransactionContext, StaticIdentity};
pub use router::InvocationRouter;
