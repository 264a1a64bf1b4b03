//! Integration tests exercising the full invocation path:
//! router -> contract -> ports -> in-memory adapters.

pub mod provenance_flows;
