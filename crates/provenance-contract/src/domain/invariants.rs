//! # Domain Invariants
//!
//! Invariants that MUST hold for every record this contract writes:
//!
//! - INVARIANT-1: a record for a given PID is created at most once
//!   (enforced in `service.rs` via the existence guard).
//! - INVARIANT-2: `owners` always ends with the creating client's identity.
//! - INVARIANT-3: `version` is 0 at creation and never mutated.
//!
//! INVARIANT-1 is a property of the write path and is enforced where the
//! write happens; the checks here cover the record-shape invariants and
//! are used by tests and debug assertions.

use crate::domain::entities::ProvenanceRecord;
use crate::domain::value_objects::ClientId;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-2: the creator's identity is the last owners entry.
#[must_use]
pub fn check_creator_appended(record: &ProvenanceRecord, creator: &ClientId) -> bool {
    record.creator() == Some(creator.as_str())
}

/// INVARIANT-3: a freshly created record carries the initial version.
#[must_use]
pub fn check_initial_version(record: &ProvenanceRecord) -> bool {
    record.version == ProvenanceRecord::INITIAL_VERSION
}

/// Checks all record-shape invariants for a record about to be written.
#[must_use]
pub fn check_record_invariants(record: &ProvenanceRecord, creator: &ClientId) -> bool {
    check_creator_appended(record, creator) && check_initial_version(record)
}

// =============================================================================
// TESTS
// =============================================================================
