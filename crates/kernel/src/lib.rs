//! Physics kernel: authoritative world state and simulation stepping.
//!
//! # Invariants
//! - `World::tick` takes one bounded substep, never a raw frame delta;
//!   frame deltas go through [`Session::advance`].
//! - Given the same initial world, config, and input sequence, stepping is
//!   bit-reproducible: pure float arithmetic, no RNG, no clock reads.
//! - The player's collision box is always derived from its position, never
//!   cached.

pub mod config;
pub mod player;
pub mod raycast;
pub mod session;
pub mod world;

pub use config::SimConfig;
pub use player::Player;
pub use raycast::{RayHit, ray_vs_aabb};
pub use session::{FrameInput, Session};
pub use world::World;
