use crate::random::RandomSource;

/// An opaque RGBA color with channels in `[0, 1]`.
///
/// The `#rrggbb` form is computed once at construction since it is only
/// ever read.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    hex: String,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        let hex = format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(r),
            channel_byte(g),
            channel_byte(b)
        );
        Self { r, g, b, a, hex }
    }

    /// Random opaque color.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let r = rng.next_f64();
        let g = rng.next_f64();
        let b = rng.next_f64();
        Self::new(r, g, b, 1.0)
    }

    pub fn to_hex(&self) -> String {
        self.hex.clone()
    }

    /// Channels as `f32`, in the order the vertex shader expects.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }
}

// Truncates like a plain `as u8` cast; values above 1.0 saturate.
fn channel_byte(c: f64) -> u8 {
    (c * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitMix64;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_hex(), "#ff0000");
        assert_eq!(Color::new(0.0, 0.0, 0.0, 1.0).to_hex(), "#000000");
        // 0.5 * 255 = 127.5 truncates to 0x7f
        assert_eq!(Color::new(0.5, 0.5, 0.5, 1.0).to_hex(), "#7f7f7f");
    }

    #[test]
    fn random_is_opaque() {
        let mut rng = SplitMix64::new(3);
        for _ in 0..100 {
            let c = Color::random(&mut rng);
            assert_eq!(c.a, 1.0);
            assert!((0.0..1.0).contains(&c.r));
            assert!((0.0..1.0).contains(&c.g));
            assert!((0.0..1.0).contains(&c.b));
            assert_eq!(c.to_hex().len(), 7);
        }
    }

    #[test]
    fn rgba_f32_order() {
        let c = Color::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(c.to_rgba_f32(), [0.25, 0.5, 0.75, 1.0]);
    }
}
