//! Colours and stroke styles used to draw the network.

/// A straight (non-premultiplied) RGBA colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Builds a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// White with the given opacity in `[0, 1]`.
    pub fn white(alpha: f32) -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Linear blend between `self` (`t = 0`) and `other` (`t = 1`), per channel.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba,
}

impl Stroke {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Background stops: indigo, blue-violet, dark violet.
pub const BACKGROUND_STOPS: [(f32, Rgba); 3] = [
    (0.0, Rgba::from_hex(0x4B0082)),
    (0.5, Rgba::from_hex(0x8A2BE2)),
    (1.0, Rgba::from_hex(0x9400D3)),
];

pub fn connection_stroke() -> Stroke {
    Stroke::new(0.5, Rgba::white(0.1))
}

pub fn point_fill() -> Rgba {
    Rgba::white(0.7)
}

pub fn pulse_stroke() -> Stroke {
    Stroke::new(2.0, Rgba::white(0.8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Rgba::from_hex(0x8A2BE2), Rgba::rgb(0x8A, 0x2B, 0xE2));
    }

    #[test]
    fn white_maps_alpha_to_byte() {
        assert_eq!(Rgba::white(0.1).a, 26);
        assert_eq!(Rgba::white(1.0).a, 255);
        assert_eq!(Rgba::white(2.0).a, 255);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Rgba::rgb(0, 100, 200);
        let b = Rgba::rgb(100, 100, 0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgba::rgb(50, 100, 100));
    }
}
