//! # Provenance-Chain Test Suite
//!
//! Unified test crate for cross-module choreography:
//!
//! ```text
//! tests/src/
//! └── integration/      # Full invoke-path flows over in-memory adapters
//!     └── provenance_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pc-tests
//!
//! # By category
//! cargo test -p pc-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
