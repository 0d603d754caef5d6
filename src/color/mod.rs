mod gradient;

pub use gradient::{ColorGradient, ControlPoint, MAX_CONTROL_POINTS};

use smart_leds::RGB8;

/// Clamped 8-bit-per-channel color.
///
/// All constructors clamp to `[0, 255]`; the invariant is enforced here and
/// nowhere else. Out-of-range inputs are never rejected, only clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from integer channels, clamping each to `[0, 255]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_ints(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Build from float channels, rounding to nearest before clamping.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_floats(r: f32, g: f32, b: f32) -> Self {
        Self::from_ints(
            libm::roundf(r) as i32,
            libm::roundf(g) as i32,
            libm::roundf(b) as i32,
        )
    }

    /// Pack into a 24-bit integer, red in the high byte, blue in the low byte.
    pub const fn as_int(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl From<Rgb> for RGB8 {
    fn from(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<RGB8> for Rgb {
    fn from(color: RGB8) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}
