//! Animation: scene stepping, the renderer interface, and per-frame helpers.
//!
//! # Invariants
//! - The controller owns the scene; renderers read it and never reorder it.
//! - One `update` call advances every rectangle by exactly one tick.
//! - Vertex buffers are sized once and refilled in place every frame.

mod controller;
mod fps;
mod renderer;
mod vertices;

pub use controller::AnimationController;
pub use fps::{FPS_WINDOW_MS, FpsCounter};
pub use renderer::Renderer;
pub use vertices::{
    COLOR_FLOATS_PER_RECT, POSITION_FLOATS_PER_RECT, VERTICES_PER_RECT, VertexBuffers,
};
