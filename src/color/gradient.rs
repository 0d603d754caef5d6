//! Piecewise-linear color gradients.
//!
//! A gradient owns a small ordered set of control colors at fractional
//! positions and maps a scalar in `[0, 1]` to an interpolated color.

use heapless::Vec;

use crate::color::Rgb;

/// Maximum number of control points a gradient can hold.
pub const MAX_CONTROL_POINTS: usize = 16;

/// A color pinned to a position along the gradient.
///
/// Channels are stored normalized to `[0, 1]`; `position` is the location of
/// the color along the gradient, also in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct ControlPoint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub position: f32,
}

impl ControlPoint {
    /// Pin an 8-bit color at `position`.
    pub fn new(color: Rgb, position: f32) -> Self {
        Self {
            r: f32::from(color.r) / 255.0,
            g: f32::from(color.g) / 255.0,
            b: f32::from(color.b) / 255.0,
            position,
        }
    }

    /// Pin an already-normalized color at `position`.
    pub const fn from_normalized(r: f32, g: f32, b: f32, position: f32) -> Self {
        Self { r, g, b, position }
    }
}

/// Piecewise-linear interpolation across ordered control points.
///
/// Points must be supplied in ascending position order; the gradient does not
/// sort them.
#[derive(Debug, Clone, Default)]
pub struct ColorGradient {
    points: Vec<ControlPoint, MAX_CONTROL_POINTS>,
}

impl ColorGradient {
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build from a slice of points, in ascending position order.
    ///
    /// Returns `Err` if the slice holds more than [`MAX_CONTROL_POINTS`].
    pub fn from_slice(points: &[ControlPoint]) -> Result<Self, ()> {
        Ok(Self {
            points: Vec::from_slice(points)?,
        })
    }

    /// Append a control point. Returns it back if the gradient is full.
    pub fn push(&mut self, point: ControlPoint) -> Result<(), ControlPoint> {
        self.points.push(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Color at `value` in `[0, 1]`, scaled back to 8-bit channels.
    ///
    /// The first point whose position exceeds `value` is interpolated against
    /// its predecessor. A `value` at or past the last position returns the
    /// last color unmodified; an empty gradient returns black.
    pub fn color_at(&self, value: f32) -> Rgb {
        let Some(last) = self.points.last() else {
            return Rgb::BLACK;
        };

        for (i, point) in self.points.iter().enumerate() {
            if value < point.position {
                let prev = &self.points[i.saturating_sub(1)];
                let position_diff = prev.position - point.position;
                // Coincident positions yield the later point's exact color
                let fract = if position_diff == 0.0 {
                    0.0
                } else {
                    (value - point.position) / position_diff
                };
                return Rgb::from_floats(
                    ((prev.r - point.r) * fract + point.r) * 255.0,
                    ((prev.g - point.g) * fract + point.g) * 255.0,
                    ((prev.b - point.b) * fract + point.b) * 255.0,
                );
            }
        }

        Rgb::from_floats(last.r * 255.0, last.g * 255.0, last.b * 255.0)
    }
}
