//! Input mapping: raw key events become shared actions.
//!
//! # Invariants
//! - The kernel consumes [`FrameInput`](boxhop_kernel::FrameInput) flags,
//!   never raw key events.
//! - Jump and reset are edges consumed once per frame; move flags are levels.

pub mod action;

pub use action::{Action, InputState};
