//! Scene primitives: randomly generated rectangles that bounce inside a canvas.
//!
//! # Invariants
//! - Coordinates are canvas pixels with the origin at the top-left corner.
//! - A freshly generated rectangle lies fully inside the canvas.
//! - Randomness is injected through [`RandomSource`]; nothing here reads a
//!   global RNG directly.

mod color;
mod random;
mod rectangle;

pub use color::Color;
#[cfg(target_arch = "wasm32")]
pub use random::MathRandom;
pub use random::{RandomSource, SplitMix64};
pub use rectangle::Rectangle;
