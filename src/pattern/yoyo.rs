//! Bouncing comet with eased head motion and a decaying tail.

use libm::{fmodf, powf, roundf};

use crate::color::Rgb;
use crate::color_map::{ColorMap, MapError};
use crate::curve::{gaussian_value, s_curve};

use super::{POWER_SCALE, Pattern, PatternError, build_full, validate_full};

/// The yoyo runs three bounce cycles per animation cycle.
const TIME_SCALE: f32 = 3.0;
/// Exponential intensity decay per LED behind the head.
const DECAY_BASE: f32 = 0.9;
/// LEDs just ahead of the head held at full intensity.
const PRE_HEAD_COUNT: i32 = 4;
/// The head travels across the middle 90% of the strip.
const MIN_HEAD_PERCENT: f32 = 0.05;
const COMET_RANGE_PERCENT: f32 = 0.9;

/// Per-channel brightness weights for the yoyo color.
///
/// Weights are renormalized against their sum so total perceived brightness
/// stays constant regardless of the chosen balance.
#[derive(Debug, Clone, Copy)]
pub struct ChannelWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ChannelWeights {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn sum(self) -> f32 {
        self.r + self.g + self.b
    }
}

/// Comet that bounces between the strip ends, easing through an S curve so
/// it appears to accelerate and decelerate. Position-dependent.
#[derive(Debug, Clone)]
pub struct Yoyo<const CAP: usize> {
    bucket_size: usize,
    leds_per_strip: usize,
    weights: ChannelWeights,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Yoyo<CAP> {
    pub fn new(
        bucket_size: usize,
        leds_per_strip: usize,
        weights: ChannelWeights,
    ) -> Result<Self, PatternError> {
        validate_full::<CAP>(bucket_size, leds_per_strip)?;
        if weights.sum() <= 0.0 {
            return Err(PatternError::ZeroWeightSum);
        }
        Ok(Self {
            bucket_size,
            leds_per_strip,
            weights,
            map: None,
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn yoyo_color(weights: ChannelWeights, input_percent: f32, idx: usize, total_idx: usize) -> Rgb {
    let percent = fmodf(input_percent * TIME_SCALE, 1.0);

    // Fold the cycle into a bounce: out on the first half, back on the second
    let mut offset_percent = percent * 2.0;
    let mut reverse = false;
    if offset_percent >= 1.0 {
        offset_percent = 2.0 - offset_percent;
        reverse = true;
    }

    let total = total_idx as f32;

    // S curve for the head idx to simulate different speeds
    let min_head_idx = MIN_HEAD_PERCENT * total;
    let head_idx = roundf(s_curve(offset_percent) * total * COMET_RANGE_PERCENT + min_head_idx) as i32;

    // Bell-shaped tail length: longest mid-bounce, shortest at the ends
    let tail_length_percent = powf(gaussian_value(offset_percent), 1.5);
    let tail_length_count = tail_length_percent * total;

    let idx = idx as i32;
    let offset_from_head = if reverse { idx - head_idx } else { head_idx - idx };

    let mut intensity = 0.0;
    if offset_from_head >= 0 && offset_from_head as f32 <= tail_length_count {
        intensity = powf(DECAY_BASE, offset_from_head as f32);
    }

    // give the head a bit extra
    if offset_from_head <= 0 && offset_from_head > -PRE_HEAD_COUNT {
        intensity = 1.0;
    }

    // adjust up due to the relative darkness of custom colors
    let additional_scale_factor = 255.0 * 3.0 / weights.sum();

    Rgb::from_floats(
        weights.r * intensity * POWER_SCALE * additional_scale_factor,
        weights.g * intensity * POWER_SCALE * additional_scale_factor,
        weights.b * intensity * POWER_SCALE * additional_scale_factor,
    )
}

impl<const CAP: usize> Pattern<CAP> for Yoyo<CAP> {
    fn compute(&self, percent: f32, idx: usize, total_idx: usize) -> Rgb {
        yoyo_color(self.weights, percent, idx, total_idx)
    }

    fn is_position_dependent(&self) -> bool {
        true
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        let leds_per_strip = self.leds_per_strip;
        let weights = self.weights;
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_full(bucket_size, leds_per_strip, |percent, idx, total_idx| {
                    yoyo_color(weights, percent, idx, total_idx)
                })?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
