//! wgpu render backend for boxhop.
//!
//! Draws the scene snapshot as instanced quads under an orthographic 2D
//! camera: solids first, then the player on top (painter order, no depth
//! buffer).
//!
//! # Invariants
//! - The renderer never mutates world state.
//! - The camera lives outside the deterministic kernel boundary.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrthoCamera;
pub use gpu::QuadRenderer;
