use frankenpenguin_shapes::Rectangle;

/// Two triangles per rectangle.
pub const VERTICES_PER_RECT: usize = 6;
/// `vec2` position per vertex.
pub const POSITION_FLOATS_PER_RECT: usize = VERTICES_PER_RECT * 2;
/// `vec4` color per vertex.
pub const COLOR_FLOATS_PER_RECT: usize = VERTICES_PER_RECT * 4;

/// CPU-side vertex data for a batch of rectangles, in clip space.
///
/// Arrays are allocated once for a fixed rectangle count and overwritten
/// each frame, so the per-frame path never allocates.
#[derive(Debug, Clone)]
pub struct VertexBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl VertexBuffers {
    pub fn with_capacity(num_rectangles: usize) -> Self {
        Self {
            positions: vec![0.0; num_rectangles * POSITION_FLOATS_PER_RECT],
            colors: vec![0.0; num_rectangles * COLOR_FLOATS_PER_RECT],
        }
    }

    /// Pack `rectangles` (pixel space, y down) into clip space (y up).
    ///
    /// Rectangles beyond the preallocated capacity are ignored.
    pub fn fill(&mut self, rectangles: &[Rectangle], canvas_width: f64, canvas_height: f64) {
        let scale_x = 2.0 / canvas_width as f32;
        let scale_y = 2.0 / canvas_height as f32;

        let positions = self.positions.chunks_exact_mut(POSITION_FLOATS_PER_RECT);
        for (out, rect) in positions.zip(rectangles) {
            let x1 = rect.x as f32 * scale_x - 1.0;
            let y1 = -(rect.y as f32 * scale_y - 1.0);
            let x2 = (rect.x as f32 + rect.width as f32) * scale_x - 1.0;
            let y2 = -((rect.y as f32 + rect.height as f32) * scale_y - 1.0);

            out.copy_from_slice(&[
                x1, y1, x2, y1, x1, y2, // first triangle
                x1, y2, x2, y1, x2, y2, // second triangle
            ]);
        }

        let colors = self.colors.chunks_exact_mut(COLOR_FLOATS_PER_RECT);
        for (out, rect) in colors.zip(rectangles) {
            let rgba = rect.color().to_rgba_f32();
            for vertex in out.chunks_exact_mut(4) {
                vertex.copy_from_slice(&rgba);
            }
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Number of vertices to draw.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frankenpenguin_shapes::Color;

    fn rect(x: f64, y: f64, w: f64, h: f64, color: Color) -> Rectangle {
        Rectangle::new(x, y, w, h, 0.0, 0.0, color)
    }

    #[test]
    fn sizes() {
        let v = VertexBuffers::with_capacity(3);
        assert_eq!(v.positions().len(), 36);
        assert_eq!(v.colors().len(), 72);
        assert_eq!(v.vertex_count(), 18);
    }

    #[test]
    fn full_canvas_maps_to_clip_corners() {
        let mut v = VertexBuffers::with_capacity(1);
        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        v.fill(&[rect(0.0, 0.0, 200.0, 100.0, white)], 200.0, 100.0);
        assert_eq!(
            v.positions(),
            &[
                -1.0, 1.0, 1.0, 1.0, -1.0, -1.0, //
                -1.0, -1.0, 1.0, 1.0, 1.0, -1.0,
            ]
        );
    }

    #[test]
    fn quarter_rect_in_top_left() {
        let mut v = VertexBuffers::with_capacity(1);
        let black = Color::new(0.0, 0.0, 0.0, 1.0);
        v.fill(&[rect(0.0, 0.0, 100.0, 50.0, black)], 200.0, 100.0);
        let p = v.positions();
        // top-left corner
        assert_eq!((p[0], p[1]), (-1.0, 1.0));
        // bottom-right corner
        assert_eq!((p[10], p[11]), (0.0, 0.0));
    }

    #[test]
    fn color_repeated_per_vertex() {
        let mut v = VertexBuffers::with_capacity(2);
        let rects = [
            rect(0.0, 0.0, 10.0, 10.0, Color::new(1.0, 0.0, 0.0, 1.0)),
            rect(0.0, 0.0, 10.0, 10.0, Color::new(0.0, 0.5, 0.25, 1.0)),
        ];
        v.fill(&rects, 100.0, 100.0);
        let c = v.colors();
        for vertex in c[..24].chunks_exact(4) {
            assert_eq!(vertex, &[1.0, 0.0, 0.0, 1.0]);
        }
        for vertex in c[24..].chunks_exact(4) {
            assert_eq!(vertex, &[0.0, 0.5, 0.25, 1.0]);
        }
    }

    #[test]
    fn extra_rectangles_ignored() {
        let mut v = VertexBuffers::with_capacity(1);
        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        let rects = [
            rect(0.0, 0.0, 10.0, 10.0, white.clone()),
            rect(5.0, 5.0, 10.0, 10.0, white),
        ];
        v.fill(&rects, 100.0, 100.0);
        assert_eq!(v.positions().len(), 12);
        assert_eq!((v.positions()[0], v.positions()[1]), (-1.0, 1.0));
    }
}
