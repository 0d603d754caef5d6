//! Traveling standing wave rendered through a color gradient.

use core::f32::consts::PI;

use libm::{cosf, fabsf};

use crate::color::{ColorGradient, Rgb};
use crate::color_map::{ColorMap, MapError};

use super::{POWER_SCALE, Pattern, PatternError, build_full, validate_full};

/// Full cosine waves across the strip.
const WAVE_COUNT: f32 = 3.0;

/// A cosine standing wave over LED position, "rotated" around 0.5 by the
/// phase so crests and troughs trade places once per cycle. The resulting
/// scalar in `[0, 1]` indexes the caller's gradient. Position-dependent.
#[derive(Debug, Clone)]
pub struct Wubwub<const CAP: usize> {
    bucket_size: usize,
    leds_per_strip: usize,
    gradient: ColorGradient,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Wubwub<CAP> {
    pub fn new(
        bucket_size: usize,
        leds_per_strip: usize,
        gradient: ColorGradient,
    ) -> Result<Self, PatternError> {
        validate_full::<CAP>(bucket_size, leds_per_strip)?;
        if gradient.is_empty() {
            return Err(PatternError::EmptyGradient);
        }
        Ok(Self {
            bucket_size,
            leds_per_strip,
            gradient,
            map: None,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn wubwub_color(gradient: &ColorGradient, percent: f32, idx: usize, total_idx: usize) -> Rgb {
    let idx_percent = idx as f32 / total_idx as f32;
    let wave_shape = (cosf(WAVE_COUNT * PI * 2.0 * idx_percent) + 1.0) / 2.0;

    // Rotate the wave around 0.5: the blend direction depends on which side
    // of the midpoint the wave value and the phase each sit on
    let swing = fabsf(wave_shape - 0.5);
    let wave_value = if wave_shape >= 0.5 {
        if percent <= 0.5 {
            wave_shape - 4.0 * percent * swing
        } else {
            wave_shape - 4.0 * (1.0 - percent) * swing
        }
    } else {
        if percent <= 0.5 {
            wave_shape + 4.0 * percent * swing
        } else {
            wave_shape + 4.0 * (1.0 - percent) * swing
        }
    };

    let gradient_rgb = gradient.color_at(wave_value);
    Rgb::from_floats(
        f32::from(gradient_rgb.r) * POWER_SCALE,
        f32::from(gradient_rgb.g) * POWER_SCALE,
        f32::from(gradient_rgb.b) * POWER_SCALE,
    )
}

impl<const CAP: usize> Pattern<CAP> for Wubwub<CAP> {
    fn compute(&self, percent: f32, idx: usize, total_idx: usize) -> Rgb {
        wubwub_color(&self.gradient, percent, idx, total_idx)
    }

    fn is_position_dependent(&self) -> bool {
        true
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        let leds_per_strip = self.leds_per_strip;
        let gradient = &self.gradient;
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_full(bucket_size, leds_per_strip, |percent, idx, total_idx| {
                    wubwub_color(gradient, percent, idx, total_idx)
                })?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
