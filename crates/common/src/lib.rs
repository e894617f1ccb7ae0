//! Shared geometry types: axis-aligned boxes and static solids.
//!
//! # Invariants
//! - `Aabb` corners are always normalized: `min.x <= max.x`, `min.y <= max.y`.
//! - A `Solid` never moves after construction.

pub mod types;

pub use types::{Aabb, Solid};
