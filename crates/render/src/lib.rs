//! Rendering adapter: renderer-agnostic interface over the simulation.
//!
//! # Invariants
//! - Renderers never mutate the world; they read a snapshot and a view.
//! - Draw data derives from world state each frame, nothing is cached.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use scene::{QuadInstance, QuadKind, scene_quads};
