//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the contract and the host ledger runtime.
//!
//! - **Driving Ports (Inbound)**: `ChaincodeInvoke`: how the host calls
//!   into the contract.
//! - **Driven Ports (Outbound)**: `WorldState`, `IdentityResolver`,
//!   `EventEmitter`, bundled behind `TransactionContext`: what the
//!   contract needs from the host.
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
