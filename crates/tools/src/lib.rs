//! Developer tooling: read-only world inspection.
//!
//! # Invariants
//! - Tools never mutate the world; they summarize it.

mod inspector;

pub use inspector::{WorldInspector, WorldSummary};
