use crate::color::Color;
use crate::random::RandomSource;

const MIN_SIZE: f64 = 10.0;
const SIZE_RANGE: f64 = 50.0;
const MAX_SPEED: f64 = 2.0;

/// An axis-aligned rectangle moving with a constant velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal velocity in pixels per tick.
    pub dx: f64,
    /// Vertical velocity in pixels per tick.
    pub dy: f64,
    color: Color,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, dx: f64, dy: f64, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            dx,
            dy,
            color,
        }
    }

    /// A random rectangle placed fully inside a `canvas_width` x `canvas_height`
    /// canvas, with each velocity component in `[-2, 2)`.
    pub fn random(rng: &mut impl RandomSource, canvas_width: f64, canvas_height: f64) -> Self {
        let width = rng.next_f64() * SIZE_RANGE + MIN_SIZE;
        let height = rng.next_f64() * SIZE_RANGE + MIN_SIZE;
        let x = rng.next_f64() * (canvas_width - width);
        let y = rng.next_f64() * (canvas_height - height);
        let dx = (rng.next_f64() - 0.5) * 2.0 * MAX_SPEED;
        let dy = (rng.next_f64() - 0.5) * 2.0 * MAX_SPEED;
        let color = Color::random(rng);

        Self::new(x, y, width, height, dx, dy, color)
    }

    pub fn generate(
        rng: &mut impl RandomSource,
        count: usize,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Vec<Rectangle> {
        let rects: Vec<_> = (0..count)
            .map(|_| Self::random(rng, canvas_width, canvas_height))
            .collect();
        tracing::debug!(count, canvas_width, canvas_height, "generated rectangles");
        rects
    }

    /// Advance one tick, reversing velocity on any axis that touches or
    /// crosses a canvas edge. Position is not clamped.
    pub fn update(&mut self, canvas_width: f64, canvas_height: f64) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x <= 0.0 || self.x + self.width >= canvas_width {
            self.dx = -self.dx;
        }
        if self.y <= 0.0 || self.y + self.height >= canvas_height {
            self.dy = -self.dy;
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}
