//! WebGL2 engine for the browser: one `Frankenpenguin` per page, ticked once
//! per animation frame.
//!
//! # Invariants
//! - Exactly one engine instance exists for the page lifetime.
//! - `tick` is update then render; render never mutates the scene.
//! - Browser bindings only exist on `wasm32`; the parsing and sizing rules
//!   they rely on are plain Rust and tested natively.

mod canvas;
mod error;
mod params;
mod shader;

#[cfg(target_arch = "wasm32")]
mod engine;
#[cfg(target_arch = "wasm32")]
mod gl_renderer;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod render_loop;

pub use canvas::{CanvasSize, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use error::{GlError, UrlParamError};
pub use params::{RECTANGLES_PARAM, parse_rectangle_count};
pub use shader::{FRAGMENT_SHADER, VERTEX_SHADER};

#[cfg(target_arch = "wasm32")]
pub use engine::Frankenpenguin;
#[cfg(target_arch = "wasm32")]
pub use render_loop::start;
