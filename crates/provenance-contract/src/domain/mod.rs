//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for provenance records.
//! NO I/O, NO async, NO external dependencies beyond serde.
//!
//! Dependencies point INWARD only: ports and adapters depend on this
//! module, never the other way around.

pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use services::*;
pub use value_objects::*;
