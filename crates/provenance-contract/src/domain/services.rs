//! # Domain Services
//!
//! Pure, stateless helpers used by the contract operations.

use crate::errors::ContractError;

// =============================================================================
// OWNERS LIST PARSING
// =============================================================================

/// Parses the caller-supplied owners argument.
///
/// The wire format is a JSON array of strings (e.g. `["org1","org2"]`).
/// Anything else, including a bare string or an array with non-string
/// elements, is rejected before any state is touched.
///
/// # Errors
///
/// Returns [`ContractError::MalformedOwners`] if `owners_json` does not
/// parse as `Vec<String>`.
pub fn parse_owners(owners_json: &str) -> Result<Vec<String>, ContractError> {
    serde_json::from_str(owners_json).map_err(|e| ContractError::MalformedOwners(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
