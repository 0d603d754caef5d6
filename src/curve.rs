//! Stateless shaping curves used for easing and decay profiles.
//!
//! All functions map `[0, 1]` to `[0, 1]`. Inputs outside that range are not
//! rejected and extrapolate to extreme values; callers must normalize first.

use core::f32::consts::PI;

use libm::{expf, powf, sqrtf};

/// Gradual S curve, symmetric about (0.5, 0.5).
///
/// `1 / (1 + (x / (1 - x))^-2)`
pub fn s_curve(x: f32) -> f32 {
    1.0 / (1.0 + powf(x / (1.0 - x), -2.0))
}

/// Sharper S ramp: transitions faster near the center than [`s_curve`].
///
/// `1 / (1 + (4x / (1 - x))^-2)`
pub fn sharp_s_ramp(x: f32) -> f32 {
    1.0 / (1.0 + powf(4.0 * x / (1.0 - x), -2.0))
}

/// Bell curve centered at 0.5, normalized so the peak is ~1.
///
/// Standard deviation 0.17 with divisor 2.34; a shaping profile, not a
/// probability density.
pub fn gaussian_value(x: f32) -> f32 {
    const SCALE_FACTOR: f32 = 2.34;
    const STD_DEV: f32 = 0.17;
    const CENTER: f32 = 0.5;

    let exponent = -0.5 * powf((x - CENTER) / STD_DEV, 2.0);
    (1.0 / (STD_DEV * sqrtf(2.0 * PI))) * expf(exponent) / SCALE_FACTOR
}
