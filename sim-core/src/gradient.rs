//! The cached diagonal background gradient.

use crate::style::{BACKGROUND_STOPS, Rgba};
use glam::Vec2;

/// A linear gradient from `start` to `end` with colour stops at offsets in
/// `[0, 1]`, sorted by offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<(f32, Rgba)>,
}

impl Gradient {
    /// The background gradient spanning `(0, 0)` to `(width, height)`.
    pub fn diagonal(width: f32, height: f32) -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::new(width, height),
            stops: BACKGROUND_STOPS.to_vec(),
        }
    }

    /// Offset of `p` along the gradient axis, clamped to `[0, 1]`.
    ///
    /// A degenerate axis (zero length) maps every point to `0`.
    pub fn offset_of(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len2 = axis.length_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        ((p - self.start).dot(axis) / len2).clamp(0.0, 1.0)
    }

    /// Colour at offset `t`, interpolated between the surrounding stops.
    pub fn color_at_offset(&self, t: f32) -> Rgba {
        let Some(&(first_t, first)) = self.stops.first() else {
            return Rgba::rgb(0, 0, 0);
        };
        if t <= first_t {
            return first;
        }

        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                let local = if span > 0.0 { (t - t0) / span } else { 1.0 };
                return c0.lerp(c1, local);
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    #[inline]
    pub fn color_at(&self, p: Vec2) -> Rgba {
        self.color_at_offset(self.offset_of(p))
    }
}
