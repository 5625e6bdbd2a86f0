use frankenpenguin_shapes::{RandomSource, Rectangle};

/// Owns the rectangles of the scene and the canvas they bounce in.
#[derive(Debug, Clone)]
pub struct AnimationController {
    rectangles: Vec<Rectangle>,
    canvas_width: f64,
    canvas_height: f64,
}

impl AnimationController {
    /// Create a scene of `num_rectangles` random rectangles.
    pub fn new(
        rng: &mut impl RandomSource,
        num_rectangles: usize,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Self {
        let rectangles = Rectangle::generate(rng, num_rectangles, canvas_width, canvas_height);
        Self::from_rectangles(rectangles, canvas_width, canvas_height)
    }

    /// Create a scene from existing rectangles.
    pub fn from_rectangles(
        rectangles: Vec<Rectangle>,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Self {
        tracing::info!(
            rectangles = rectangles.len(),
            canvas_width,
            canvas_height,
            "animation controller created"
        );
        Self {
            rectangles,
            canvas_width,
            canvas_height,
        }
    }

    /// Advance every rectangle by one tick.
    pub fn update(&mut self) {
        for rect in &mut self.rectangles {
            rect.update(self.canvas_width, self.canvas_height);
        }
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Resize the bounding canvas. Rectangles keep their positions and
    /// bounce off the new edges from the next tick on.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        tracing::debug!(width, height, "canvas resized");
        self.canvas_width = width;
        self.canvas_height = height;
    }
}
