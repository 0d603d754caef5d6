//! Prioritized list of moving shots.

use heapless::Vec;
use libm::{powf, roundf};

use crate::color::Rgb;
use crate::color_map::{ColorMap, MapError};

use super::{POWER_SCALE, Pattern, PatternError, build_full, validate_full};

/// Maximum number of shots a pattern can hold.
pub const MAX_SHOTS: usize = 8;

/// Shots dimmer than this lose to the next candidate.
const MIN_INTENSITY: f32 = 0.2;

/// A single moving light: it travels from `start_pct` to `end_pct` of the
/// strip over one phase cycle, fading exponentially with distance from its
/// head.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    /// Where the shot starts, as a fraction of the strip.
    pub start_pct: f32,
    /// Where the shot ends, as a fraction of the strip.
    pub end_pct: f32,
    /// Exponential decay base per LED of distance from the head, in `[0, 1]`.
    pub dropoff_factor: f32,
    /// Color of the shot.
    pub color: Rgb,
}

impl Shot {
    pub const fn new(start_pct: f32, end_pct: f32, dropoff_factor: f32, color: Rgb) -> Self {
        Self {
            start_pct,
            end_pct,
            dropoff_factor,
            color,
        }
    }
}

/// Overlay of caller-ordered shots; when several shots cover an LED, the one
/// later in the list wins. Position-dependent.
#[derive(Debug, Clone)]
pub struct Sparkshot<const CAP: usize> {
    bucket_size: usize,
    leds_per_strip: usize,
    vary_intensity: bool,
    shots: Vec<Shot, MAX_SHOTS>,
    map: Option<ColorMap<CAP>>,
}

impl<const CAP: usize> Sparkshot<CAP> {
    /// Build from a caller-ordered shot list.
    ///
    /// With `vary_intensity` unset, a qualifying shot renders at full
    /// intensity instead of its graded value.
    pub fn new(
        bucket_size: usize,
        leds_per_strip: usize,
        vary_intensity: bool,
        shots: &[Shot],
    ) -> Result<Self, PatternError> {
        validate_full::<CAP>(bucket_size, leds_per_strip)?;
        if shots.is_empty() {
            return Err(PatternError::EmptyShotList);
        }
        for shot in shots {
            if !(0.0..=1.0).contains(&shot.dropoff_factor) {
                return Err(PatternError::DropoffOutOfRange {
                    value: shot.dropoff_factor,
                });
            }
            // Renormalization divides by the channel sum
            if shot.color == Rgb::BLACK {
                return Err(PatternError::DarkShotColor);
            }
        }
        let shots = Vec::from_slice(shots).map_err(|()| PatternError::TooManyShots {
            given: shots.len(),
            max: MAX_SHOTS,
        })?;
        Ok(Self {
            bucket_size,
            leds_per_strip,
            vary_intensity,
            shots,
            map: None,
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn sparkshot_color(
    shots: &[Shot],
    vary_intensity: bool,
    percent: f32,
    idx: usize,
    total_idx: usize,
) -> Rgb {
    let total = total_idx as f32;

    // Iterate over shots backwards (last shot gets precedence)
    for shot in shots.iter().rev() {
        let start_idx = roundf(shot.start_pct * total) as i32;
        let end_idx = roundf(shot.end_pct * total) as i32;
        let total_distance = (end_idx - start_idx).abs();
        let forward = end_idx > start_idx;

        let distance = percent * total_distance as f32;
        let head_idx = if forward {
            roundf(start_idx as f32 + distance) as i32
        } else {
            roundf(start_idx as f32 - distance) as i32
        };
        let distance_from_head = (head_idx - idx as i32).abs();
        let mut intensity = powf(shot.dropoff_factor, distance_from_head as f32);

        // Move to the next shot if this one isn't bright enough
        if intensity < MIN_INTENSITY {
            continue;
        }

        if !vary_intensity {
            intensity = 1.0;
        }

        let color = shot.color;
        let channel_sum = f32::from(color.r) + f32::from(color.g) + f32::from(color.b);
        let additional_scale_factor = 255.0 * 3.0 / channel_sum;

        return Rgb::from_floats(
            POWER_SCALE * intensity * f32::from(color.r) * additional_scale_factor,
            POWER_SCALE * intensity * f32::from(color.g) * additional_scale_factor,
            POWER_SCALE * intensity * f32::from(color.b) * additional_scale_factor,
        );
    }

    Rgb::BLACK
}

impl<const CAP: usize> Pattern<CAP> for Sparkshot<CAP> {
    fn compute(&self, percent: f32, idx: usize, total_idx: usize) -> Rgb {
        sparkshot_color(&self.shots, self.vary_intensity, percent, idx, total_idx)
    }

    fn is_position_dependent(&self) -> bool {
        true
    }

    fn color_map(&mut self) -> Result<&ColorMap<CAP>, MapError> {
        let bucket_size = self.bucket_size;
        let leds_per_strip = self.leds_per_strip;
        let vary_intensity = self.vary_intensity;
        let shots = &self.shots;
        match &mut self.map {
            Some(map) => Ok(map),
            slot => {
                let map = build_full(bucket_size, leds_per_strip, |percent, idx, total_idx| {
                    sparkshot_color(shots, vary_intensity, percent, idx, total_idx)
                })?;
                Ok(slot.insert(map))
            }
        }
    }

    fn reset(&mut self) {
        self.map = None;
    }
}
